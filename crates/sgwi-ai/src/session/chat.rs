//! Submitting questions: validation, quota, dispatch, and resolution.

use tracing::{debug, error, warn};

use crate::{AnswerProvider, Message};

use super::manager::ChatSession;
use super::types::{
    SubmitOutcome, TypingGuard, CONNECTION_ERROR_NOTICE, NO_RESPONSE_NOTICE, RATE_LIMIT_NOTICE,
};

impl ChatSession {
    /// Put `question` in the input buffer and submit it.
    pub async fn ask(
        &mut self,
        provider: &dyn AnswerProvider,
        question: impl Into<String>,
    ) -> SubmitOutcome {
        self.set_input(question);
        self.submit(provider).await
    }

    /// Submit the input buffer.
    ///
    /// Never fails: every provider error becomes an assistant message. The
    /// exclusive borrow keeps one question in flight per session.
    pub async fn submit(&mut self, provider: &dyn AnswerProvider) -> SubmitOutcome {
        let question = self.input.trim().to_string();
        if question.is_empty() {
            return SubmitOutcome::Ignored;
        }

        let now = (self.clock)();
        if !self.requests.check(now) {
            warn!(
                session = %self.id.short(),
                recent = self.requests.len(),
                "question throttled"
            );
            self.push_message(Message::assistant(RATE_LIMIT_NOTICE));
            return SubmitOutcome::Throttled;
        }

        self.push_message(Message::user(question.clone()));
        self.input.clear();
        let typing = TypingGuard::engage(self.typing.clone(), self.events.clone());
        self.requests.record(now);

        debug!(
            session = %self.id.short(),
            chars = question.len(),
            "dispatching question"
        );

        let outcome = match provider.ask(&question).await {
            Ok(response) => {
                self.tracker.record(&response.usage);
                let text = if response.content.trim().is_empty() {
                    debug!(session = %self.id.short(), "provider returned no text");
                    NO_RESPONSE_NOTICE.to_string()
                } else {
                    response.content
                };
                self.push_message(Message::assistant(text));
                SubmitOutcome::Answered
            }
            Err(e) => {
                error!(session = %self.id.short(), "answer provider failed: {e}");
                self.tracker.record_failure();
                self.push_message(Message::assistant(CONNECTION_ERROR_NOTICE));
                SubmitOutcome::Failed
            }
        };

        drop(typing);
        outcome
    }
}
