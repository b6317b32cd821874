//! Binary crate for the `skycast` terminal dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive search loop (autocomplete + recent searches)
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod client;
mod dash;
mod display;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
