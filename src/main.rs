//! SOS in the terminal.

mod app;
mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            variant,
            blue,
            red,
            log,
            delay_ms,
        } => {
            app::run_match(app::MatchOptions {
                size,
                variant,
                blue,
                red,
                log,
                delay_ms,
            })
            .await
        }
        Command::Replay {
            file,
            size,
            variant,
        } => app::run_replay(&file, size, variant),
    }
}
