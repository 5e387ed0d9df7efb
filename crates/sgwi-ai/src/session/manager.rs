//! ChatSession struct, construction, and observable state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sgwi_common::SessionId;
use tokio::sync::mpsc::UnboundedSender;

use crate::rate_limit::RequestLog;
use crate::token_tracker::TokenTracker;
use crate::Message;

use super::types::{system_clock, Clock, SessionEvent, TypingIndicator, GREETING};

/// One conversation with the paper assistant.
///
/// Owns the message log, the request quota, the input buffer and the typing
/// flag. Nothing is persisted; dropping the session ends the conversation.
pub struct ChatSession {
    /// Correlates log lines of this session.
    pub(super) id: SessionId,
    /// Rendered conversation, oldest first.
    pub(super) messages: Vec<Message>,
    /// Timestamps of dispatched questions.
    pub(super) requests: RequestLog,
    /// Text the user is composing.
    pub(super) input: String,
    /// True only while a provider call is in flight.
    pub(super) typing: Arc<AtomicBool>,
    pub(super) tracker: TokenTracker,
    pub(super) clock: Clock,
    pub(super) events: Option<UnboundedSender<SessionEvent>>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            messages: Vec::new(),
            requests: RequestLog::new(),
            input: String::new(),
            typing: Arc::new(AtomicBool::new(false)),
            tracker: TokenTracker::new(),
            clock: system_clock(),
            events: None,
        }
    }

    /// Open the conversation with the assistant's introduction.
    pub fn with_greeting(mut self) -> Self {
        self.push_message(Message::assistant(GREETING));
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Publish message and typing changes to `events`.
    pub fn with_events(mut self, events: UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub(super) fn push_message(&mut self, message: Message) {
        if let Some(tx) = &self.events {
            let _ = tx.send(SessionEvent::MessageAppended(message.clone()));
        }
        self.messages.push(message);
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Replace the input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether a submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_typing()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_typing(&self) -> bool {
        self.typing.load(Ordering::Acquire)
    }

    pub fn typing_indicator(&self) -> TypingIndicator {
        TypingIndicator(Arc::clone(&self.typing))
    }

    /// Accepted questions still inside the quota window, as of the last check.
    pub fn recent_request_count(&self) -> usize {
        self.requests.len()
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
