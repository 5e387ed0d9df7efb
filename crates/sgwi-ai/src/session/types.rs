//! Session types, user-facing notices, and the typing guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::Message;

/// First assistant message of a session opened with a greeting.
pub const GREETING: &str = "Hello! I am an AI assistant trained on this paper. Ask me about the \
                            methodology, results, or conclusions.";

/// Shown instead of dispatching when the request quota is exhausted.
pub const RATE_LIMIT_NOTICE: &str = "\u{26a0}\u{fe0f} Rate limit exceeded. Please wait a minute \
                                     before asking more questions to ensure service availability.";

/// Shown when the provider answered with no usable text.
pub const NO_RESPONSE_NOTICE: &str = "I could not generate a response.";

/// Shown when the provider call failed. The underlying error is only logged.
pub const CONNECTION_ERROR_NOTICE: &str = "Error connecting to the AI research assistant. \
                                           Please check your API key or try again later.";

/// Source of "now" in milliseconds since the Unix epoch.
pub type Clock = Box<dyn Fn() -> i64 + Send + Sync>;

/// Wall-clock time.
pub fn system_clock() -> Clock {
    Box::new(|| chrono::Utc::now().timestamp_millis())
}

/// How a submission was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing changed.
    Ignored,
    /// Quota exhausted; a rate-limit notice was appended.
    Throttled,
    /// The provider answered (possibly with the no-response notice).
    Answered,
    /// The provider call failed; the connection-error notice was appended.
    Failed,
}

/// State changes pushed to a front end while the session works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    MessageAppended(Message),
    TypingChanged(bool),
}

/// Read-only view of a session's typing flag that outlives borrows of the
/// session, so a renderer can poll it while a question is in flight.
#[derive(Debug, Clone)]
pub struct TypingIndicator(pub(super) Arc<AtomicBool>);

impl TypingIndicator {
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Holds the typing flag up for the duration of a provider call and clears
/// it on drop, including when the awaiting future is dropped.
pub(crate) struct TypingGuard {
    flag: Arc<AtomicBool>,
    events: Option<UnboundedSender<SessionEvent>>,
}

impl TypingGuard {
    pub(crate) fn engage(
        flag: Arc<AtomicBool>,
        events: Option<UnboundedSender<SessionEvent>>,
    ) -> Self {
        flag.store(true, Ordering::Release);
        if let Some(tx) = &events {
            let _ = tx.send(SessionEvent::TypingChanged(true));
        }
        Self { flag, events }
    }
}

impl Drop for TypingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        if let Some(tx) = &self.events {
            let _ = tx.send(SessionEvent::TypingChanged(false));
        }
    }
}
