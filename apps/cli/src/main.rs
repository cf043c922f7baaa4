//! relnotify CLI: announce a finished release in Slack.
//!
//! Posts the release announcement, attaches build artifacts in its thread,
//! and rewrites the announcement with download links.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
