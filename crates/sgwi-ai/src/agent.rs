//! Gemini-backed `AnswerProvider` scoped to one paper.

use async_trait::async_trait;
use tracing::debug;

use crate::gemini::GeminiClient;
use crate::paper::PaperInfo;
use crate::{AiError, AiResponse, AnswerProvider};

/// Answers questions about a single paper.
///
/// An agent can be built without a working client (no credential, HTTP
/// client construction failed). It then fails every `ask` with the
/// construction error, so callers see the problem as an ordinary call
/// failure instead of at startup.
pub struct PaperAgent {
    paper: PaperInfo,
    system_instruction: String,
    client: Result<GeminiClient, AiError>,
}

impl PaperAgent {
    pub fn new(paper: PaperInfo, client: Result<GeminiClient, AiError>) -> Self {
        if let Err(e) = &client {
            debug!("paper agent has no client: {e}");
        }
        Self {
            system_instruction: paper.system_instruction(),
            paper,
            client,
        }
    }

    pub fn paper(&self) -> &PaperInfo {
        &self.paper
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_ok()
    }
}

#[async_trait]
impl AnswerProvider for PaperAgent {
    async fn ask(&self, question: &str) -> Result<AiResponse, AiError> {
        match &self.client {
            Ok(client) => client.generate(&self.system_instruction, question).await,
            Err(e) => Err(e.clone()),
        }
    }
}
