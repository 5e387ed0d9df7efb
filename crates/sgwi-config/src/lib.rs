//! SGWI paper assistant configuration.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sgwi_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AssistantConfig, ChatConfig, LogLevel, LoggingConfig, SgwiConfig};

use std::path::Path;

use sgwi_common::ConfigError;

/// Load and validate the config.
///
/// With `path`, that file must exist. Without it, `config.toml` is loaded
/// from the OS config directory and created with defaults if missing.
pub fn load_config(path: Option<&Path>) -> Result<SgwiConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SgwiConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
