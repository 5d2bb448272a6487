//! CLI entry point for the spiral tiling generator

use clap::Parser;
use spiraltile::io::cli::{Cli, FileProcessor};

fn main() -> spiraltile::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
