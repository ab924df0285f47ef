// ============================================================
// Layer 3 — Query Outcomes and Replies
// ============================================================
// Two levels of result:
//
//   QueryOutcome — what the retrieval index says about a query:
//                  either the winning answer or "no match".
//
//   Reply        — what the presentation shell shows the user:
//                  a You/Bot exchange, a validation message, or
//                  a generic apology when something went wrong.
//
// Keeping these as enums means every caller has to decide what
// to do with the empty-query and failure paths.

use std::fmt;

/// Shown when the question normalizes to nothing.
pub const INVALID_QUESTION_MESSAGE: &str = "Please enter a valid question.";

/// Shown when answering failed unexpectedly.
pub const FAILURE_MESSAGE: &str =
    "Sorry, I couldn't find an answer to that question at the moment. Please try again later.";

/// Why the index declined to pick an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatchReason {
    /// The query had no tokens left after normalization
    EmptyQuery,
}

impl fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoMatchReason::EmptyQuery => f.write_str("empty query"),
        }
    }
}

/// Result of a single retrieval query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Answer text of the nearest corpus entry
    Answer(String),
    NoMatch(NoMatchReason),
}

/// What the presentation shell displays for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The user's question and the bot's answer
    Exchange { question: String, answer: String },

    /// The question normalized to nothing
    Invalid,

    /// Answering failed; details went to the operator log
    Failure,
}

impl Reply {
    /// Display lines, in order.
    ///
    /// An exchange is two lines ("You: ..." then "Bot: ...");
    /// the other variants are a single message line.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Reply::Exchange { question, answer } => {
                vec![format!("You: {question}"), format!("Bot: {answer}")]
            }
            Reply::Invalid => vec![INVALID_QUESTION_MESSAGE.to_string()],
            Reply::Failure => vec![FAILURE_MESSAGE.to_string()],
        }
    }

    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Exchange { .. } => "exchange",
            Reply::Invalid => "invalid",
            Reply::Failure => "failure",
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
