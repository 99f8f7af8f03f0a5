//! CLI entry point for mosaic reconstruction and motif scanning

use clap::Parser;
use mosaic::io::cli::{Cli, PuzzleProcessor};

fn main() -> mosaic::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    let mut processor = PuzzleProcessor::new(cli);
    processor.process()
}
