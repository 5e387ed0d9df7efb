//! Terminal rendering of session events.

use sgwi_ai::{Message, PaperInfo, Role, SessionEvent};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

const COMPOSING: &str = "assistant is composing...";

/// Text to print for one event, if any.
///
/// User turns are skipped when `echo_user` is false because the terminal
/// already shows what was typed.
pub fn format_event(event: &SessionEvent, echo_user: bool) -> Option<String> {
    match event {
        SessionEvent::MessageAppended(Message {
            role: Role::User,
            text,
        }) => echo_user.then(|| format!("you> {text}\n")),
        SessionEvent::MessageAppended(Message {
            role: Role::Assistant,
            text,
        }) => Some(format!("\nassistant> {}\n\n", text.trim_end())),
        SessionEvent::TypingChanged(true) => Some(format!("{COMPOSING}\n")),
        SessionEvent::TypingChanged(false) => None,
    }
}

/// Banner shown before the first prompt.
pub fn header(paper: &PaperInfo) -> String {
    format!(
        "{}\n{}\n{}\n\nType a question, /help for commands, /quit to leave.\n",
        paper.title, paper.authors, paper.doi_url
    )
}

/// Print events to stdout until the session's sender is dropped.
pub fn spawn(mut events: UnboundedReceiver<SessionEvent>, echo_user: bool) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut out = tokio::io::stdout();
        while let Some(event) = events.recv().await {
            if let Some(text) = format_event(&event, echo_user) {
                if out.write_all(text.as_bytes()).await.is_err() {
                    break;
                }
                let _ = out.flush().await;
            }
        }
    })
}
