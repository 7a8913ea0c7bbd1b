//! CLI entry point for the surrounded-territory sweep

use clap::Parser;
use stoneflood::io::cli::{BoardProcessor, Cli};

fn main() -> stoneflood::Result<()> {
    let cli = Cli::parse();
    let mut processor = BoardProcessor::new(cli);
    processor.process()
}
