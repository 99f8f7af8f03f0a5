//! Command-line interface for solving one puzzle file or a directory of them

use crate::algorithm::pipeline::{Pipeline, Solution};
use crate::algorithm::scanner::Motif;
use crate::io::configuration::{OUTPUT_SUFFIX, PUZZLE_EXTENSION};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::export_mosaic_png;
use crate::io::parser::{load_motif, load_tiles};
use crate::io::progress::ProgressManager;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(
    author,
    version,
    about = "Reassemble scrambled square tiles and scan the mosaic for a motif"
)]
/// Command-line arguments for the mosaic solver
pub struct Cli {
    /// Puzzle file, or directory of `.txt` puzzle files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Motif file drawn with `#` (defaults to the built-in sea monster)
    #[arg(short, long, value_name = "FILE")]
    pub motif: Option<PathBuf>,

    /// Export each reconstructed mosaic as a PNG next to its input
    #[arg(short, long)]
    pub export: bool,

    /// Suppress progress output and all logging except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging detail (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Maximum log level selected by the flags
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Install a stderr log subscriber at the selected level
    ///
    /// Does nothing if a global subscriber is already installed.
    pub fn init_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_max_level(self.log_level())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Solves puzzle files one after another with progress tracking
pub struct PuzzleProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PuzzleProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve every puzzle selected by the CLI arguments and print the answers
    ///
    /// # Errors
    ///
    /// Returns the first error from target validation, motif loading, or any
    /// puzzle; processing stops there
    // Allow print for the answers, which are the program output
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        let motif = match &self.cli.motif {
            Some(path) => load_motif(path)?,
            None => Motif::sea_monster(),
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let show_headers = files.len() > 1;
        for file in &files {
            let solution = self.process_file(file, &motif)?;
            if show_headers {
                println!("== {}", file.display());
            }
            println!("{}", solution.corner_product);
            println!("{}", solution.roughness);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Solve one puzzle file, exporting the mosaic if requested
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded, solved or exported
    pub fn process_file(&self, input_path: &Path, motif: &Motif) -> Result<Solution> {
        let progress = self.progress_manager.as_ref();
        if let Some(pm) = progress {
            pm.start_file(input_path);
        }

        let tiles = load_tiles(input_path)?;
        let reconstruction = Pipeline::new(motif).reconstruct(&tiles, |stage| {
            if let Some(pm) = progress {
                pm.advance(stage);
            }
        })?;

        if self.cli.export {
            export_mosaic_png(
                &reconstruction.composite,
                &reconstruction.motif_pixels,
                &Self::get_output_path(input_path),
            )?;
        }

        if let Some(pm) = progress {
            pm.complete_file();
        }

        Ok(reconstruction.solution)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| MosaicError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a puzzle file or a directory",
            ))
        }
    }

    /// Path of the PNG exported for a puzzle file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
