//! Binary crate for the `weatherbro` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Field selection for the report
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod format;
mod select;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
