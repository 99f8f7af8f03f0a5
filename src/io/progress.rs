//! Stage progress display with a batch bar for large file sets

use crate::algorithm::pipeline::Stage;
use crate::io::configuration::BATCH_PROGRESS_THRESHOLD;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Puzzles: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Shows pipeline stages for the current puzzle
///
/// A batch bar counting finished puzzles is added when more than
/// `BATCH_PROGRESS_THRESHOLD` files are processed.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    stage_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            stage_bar: None,
        }
    }

    /// Create the bars for a batch of `file_count` puzzles
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > BATCH_PROGRESS_THRESHOLD {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let stage_bar = ProgressBar::new(Stage::ALL.len() as u64);
        stage_bar.set_style(STAGE_STYLE.clone());
        self.stage_bar = Some(self.multi_progress.add(stage_bar));
    }

    /// Reset the stage bar for a new puzzle
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.stage_bar {
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_position(0);
            bar.set_prefix(name);
            bar.set_message(String::new());
        }
    }

    /// Report the stage about to run
    pub fn advance(&self, stage: Stage) {
        if let Some(ref bar) = self.stage_bar {
            bar.set_position(stage.position() as u64);
            bar.set_message(stage.to_string());
        }
    }

    /// Mark the current puzzle as solved
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.stage_bar {
            bar.set_position(Stage::ALL.len() as u64);
            bar.set_message("✓ solved");
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Stage bar position, if the bars have been created
    pub fn stage_position(&self) -> Option<u64> {
        self.stage_bar.as_ref().map(ProgressBar::position)
    }

    /// Finished puzzle count, if a batch bar is shown
    pub fn batch_position(&self) -> Option<u64> {
        self.batch_bar.as_ref().map(ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All puzzles processed");
        }
        if let Some(ref bar) = self.stage_bar {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
