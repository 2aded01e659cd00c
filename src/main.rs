//! CLI entry point for batch collage generation

use clap::Parser;
use tilecollage::io::cli::{Cli, CollageBatch};
use tracing_subscriber::EnvFilter;

fn main() -> tilecollage::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut batch = CollageBatch::new(cli);
    batch.run()
}
