//! Interactive chat loop over stdin.

use sgwi_ai::rate_limit::MAX_REQUESTS;
use sgwi_ai::{AnswerProvider, ChatSession};
use sgwi_common::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// A line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Usage,
    Question(String),
}

pub fn parse_line(line: &str) -> Command {
    match line.trim() {
        "/quit" | "/exit" => Command::Quit,
        "/help" => Command::Help,
        "/usage" => Command::Usage,
        _ => Command::Question(line.to_string()),
    }
}

const HELP: &str = "\
Commands:
  /help   show this message
  /usage  show token usage for this session
  /quit   leave (also /exit or Ctrl-D)
Anything else is sent to the assistant (at most 5 questions per minute).
";

/// Read questions from stdin until EOF or `/quit`.
pub async fn run_interactive(
    session: &mut ChatSession,
    provider: &dyn AnswerProvider,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Command::Quit => break,
            Command::Help => out.write_all(HELP.as_bytes()).await?,
            Command::Usage => {
                let usage = usage_line(session);
                out.write_all(usage.as_bytes()).await?;
            }
            Command::Question(text) => {
                let outcome = session.ask(provider, text).await;
                tracing::debug!(?outcome, "question handled");
            }
        }
        out.flush().await?;
    }

    tracing::info!(
        session = %session.id().short(),
        messages = session.message_count(),
        "chat ended"
    );
    Ok(())
}

fn usage_line(session: &ChatSession) -> String {
    let tracker = session.tracker();
    format!(
        "{} calls ({} failed), {} input + {} output tokens, {} of {} questions used this minute\n",
        tracker.call_count(),
        tracker.failure_count(),
        tracker.total().input_tokens,
        tracker.total().output_tokens,
        session.recent_request_count(),
        MAX_REQUESTS,
    )
}
