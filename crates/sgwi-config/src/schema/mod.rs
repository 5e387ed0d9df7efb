//! Configuration schema types for the SGWI paper assistant.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the web widget shipped with.

mod assistant;
mod chat;
mod logging;

pub use assistant::*;
pub use chat::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// The request quota (5 questions per rolling minute) is deliberately
/// absent: it is a fixed property of the session manager.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SgwiConfig {
    pub assistant: AssistantConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
