// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `serve`, `ask` and `chat`
// and all their configurable flags.
//
// Every flag that points at a file can also be set through an
// INTELLICHAT_* environment variable (clap's `env` feature).
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::application::build_use_case::BuildConfig;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the question form and JSON API over HTTP
    Serve(ServeArgs),

    /// Answer a single question and exit
    Ask(AskArgs),

    /// Read questions from stdin, one per line
    Chat(ChatArgs),
}

/// Where the corpus and lexicon come from. Shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// CSV file with `Question` and `Answer` columns.
    /// A missing or unusable file falls back to the built-in sample corpus.
    #[arg(long, env = "INTELLICHAT_CORPUS", default_value = "chatbot_dataset.csv")]
    pub corpus: PathBuf,

    /// Lemmatization lexicon replacing the embedded one
    #[arg(long, env = "INTELLICHAT_LEXICON")]
    pub lexicon: Option<PathBuf>,
}

/// Convert CLI CorpusArgs into the application-layer BuildConfig.
/// The application layer never sees clap types.
impl From<CorpusArgs> for BuildConfig {
    fn from(a: CorpusArgs) -> Self {
        BuildConfig {
            corpus_path:  a.corpus,
            lexicon_path: a.lexicon,
        }
    }
}

/// All arguments for the `serve` command
#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Address to listen on
    #[arg(long, env = "INTELLICHAT_BIND", default_value = "127.0.0.1:8050")]
    pub bind: SocketAddr,
}

/// All arguments for the `ask` command
#[derive(Args, Debug)]
pub struct AskArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// The question to answer
    #[arg(long)]
    pub question: String,
}

/// All arguments for the `chat` command
#[derive(Args, Debug)]
pub struct ChatArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["intellichat", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else { panic!("expected serve") };
        assert_eq!(args.bind, "127.0.0.1:8050".parse::<SocketAddr>().unwrap());
        assert_eq!(BuildConfig::from(args.corpus), BuildConfig::default());
    }

    #[test]
    fn test_ask_with_paths() {
        let cli = Cli::try_parse_from([
            "intellichat", "--debug", "ask",
            "--question", "Where is my order?",
            "--corpus", "faq.csv",
            "--lexicon", "words.txt",
        ])
        .unwrap();
        assert!(cli.debug);
        let Commands::Ask(args) = cli.command else { panic!("expected ask") };
        assert_eq!(args.question, "Where is my order?");
        let cfg = BuildConfig::from(args.corpus);
        assert_eq!(cfg.corpus_path, PathBuf::from("faq.csv"));
        assert_eq!(cfg.lexicon_path, Some(PathBuf::from("words.txt")));
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["intellichat", "ask"]).is_err());
    }

    #[test]
    fn test_bad_bind_address_is_rejected() {
        assert!(Cli::try_parse_from(["intellichat", "serve", "--bind", "nowhere"]).is_err());
    }
}
