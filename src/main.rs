mod application;
mod cli;
mod data;
mod domain;
mod infra;
mod ml;
mod web;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "intellichat=debug,tower_http=debug"
    } else {
        "intellichat=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    cli.run()
}
