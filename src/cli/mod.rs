// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All answering logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `serve` — HTTP form + JSON API (see crate::web)
//   2. `ask`   — answer one question and print the reply
//   3. `chat`  — answer questions read from stdin
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod chat;
pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use crate::application::ask_use_case::AskUseCase;
use crate::application::build_use_case::BuildUseCase;
use commands::{AskArgs, ChatArgs, Commands, CorpusArgs, ServeArgs};

/// The main CLI struct.
#[derive(Parser, Debug)]
#[command(
    name = "intellichat",
    version,
    about = "Answer FAQ-style questions by TF-IDF nearest-neighbour lookup over a Question/Answer CSV."
)]
pub struct Cli {
    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch.
    /// The CLI layer only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => run_serve(args),
            Commands::Ask(args)   => run_ask(args),
            Commands::Chat(args)  => run_chat(args),
        }
    }
}

/// Build the shared use case from the corpus flags.
fn build(args: CorpusArgs) -> Result<AskUseCase> {
    BuildUseCase::new(args.into()).execute()
}

/// Handles the `serve` subcommand.
/// The index is built before the runtime starts, so a fatal build
/// error never leaves a half-started server behind.
fn run_serve(args: ServeArgs) -> Result<()> {
    let ask = Arc::new(build(args.corpus)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Cannot start the async runtime")?;
    runtime.block_on(crate::web::serve(args.bind, ask))
}

/// Handles the `ask` subcommand.
fn run_ask(args: AskArgs) -> Result<()> {
    let uc = build(args.corpus)?;
    println!("{}", uc.handle(&args.question));
    Ok(())
}

/// Handles the `chat` subcommand.
fn run_chat(args: ChatArgs) -> Result<()> {
    let uc = build(args.corpus)?;
    let stdin = std::io::stdin();
    chat::chat_loop(&uc, stdin.lock(), std::io::stdout())?;
    Ok(())
}
