//! CLI entry point for autotile sheet composition

use autosheet::io::cli::{Cli, SheetProcessor};
use clap::Parser;

fn main() -> autosheet::Result<()> {
    let cli = Cli::parse();
    let processor = SheetProcessor::new(cli);
    processor.process()
}
