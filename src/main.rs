//! CLI entry point for procedural texture generation and raster editing

use clap::Parser;
use texturetk::io::cli::{Cli, CommandRunner};

fn main() -> texturetk::Result<()> {
    let cli = Cli::parse();
    let runner = CommandRunner::new(cli);
    runner.run()
}
