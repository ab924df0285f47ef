// ============================================================
// Layer 1 — Interactive Chat Loop
// ============================================================
// One question per input line, one reply per question.
// Blank lines are skipped, `exit` / `quit` or end of input stops
// the loop. Generic over the reader and writer so it can be
// driven from tests as well as from stdin/stdout.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::application::ask_use_case::AskUseCase;

const PROMPT: &str = "> ";

/// Run the loop until `exit`, `quit` or end of input.
/// Returns the number of questions handled.
pub fn chat_loop<R: BufRead, W: Write>(uc: &AskUseCase, input: R, mut output: W) -> Result<usize> {
    writeln!(output, "IntelliChat Bot. Type `exit` to leave.")?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut handled = 0;
    for line in input.lines() {
        let line = line?;
        let question = line.trim();

        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }
        if !question.is_empty() {
            let reply = uc.handle(question);
            for text in reply.lines() {
                writeln!(output, "{text}")?;
            }
            handled += 1;
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    writeln!(output)?;

    let stats = uc.metrics();
    tracing::info!(
        "Chat ended: {} answered, {} invalid, {} failed",
        stats.answered,
        stats.invalid,
        stats.failed
    );
    Ok(handled)
}
