//! Chat front-end configuration types.

use serde::{Deserialize, Serialize};

/// Chat widget behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Open every session with the assistant's introductory message.
    pub greeting: bool,
    /// Print the paper title, authors and DOI before the first prompt.
    pub show_header: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: true,
            show_header: true,
        }
    }
}
