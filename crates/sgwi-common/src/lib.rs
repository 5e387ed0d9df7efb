pub mod errors;
pub mod id;

pub use errors::{AssistantError, ConfigError};
pub use id::SessionId;

pub type Result<T> = std::result::Result<T, AssistantError>;
