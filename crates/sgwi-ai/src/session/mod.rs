//! Conversation session management.
//!
//! A `ChatSession` holds the conversation history, enforces the rolling
//! request quota, and mediates every call to an `AnswerProvider`.

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{
    system_clock, Clock, SessionEvent, SubmitOutcome, TypingIndicator, CONNECTION_ERROR_NOTICE,
    GREETING, NO_RESPONSE_NOTICE, RATE_LIMIT_NOTICE,
};
