//! Locating, reading, and seeding `sgwi/config.toml`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sgwi_common::ConfigError;
use tracing::{info, warn};

use super::template::default_config_toml;
use crate::schema::SgwiConfig;
use crate::validation;

const APP_DIR: &str = "sgwi";
const FILE_NAME: &str = "config.toml";

/// Where `sgwi-chat` looks for its config when no path is given.
///
/// `~/.config/sgwi/config.toml` on Linux,
/// `~/Library/Application Support/sgwi/config.toml` on macOS.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| {
            ConfigError::ParseError(
                "no per-user config directory on this platform; pass --config".into(),
            )
        })
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error =
        |e: io::Error| ConfigError::ParseError(format!("cannot seed {}: {e}", path.display()));

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_error)?;
    }
    fs::write(path, default_config_toml()).map_err(io_error)?;

    info!(path = %path.display(), "wrote default sgwi config");
    Ok(())
}

/// Parse one config file.
///
/// Missing fields take their defaults. Out-of-range values are logged and
/// kept; `load_config` is the entry point that rejects them.
pub fn load_from_path(path: &Path) -> Result<SgwiConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!("cannot read {}: {e}", path.display())));
        }
    };

    let config: SgwiConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }

    info!(
        path = %path.display(),
        model = %config.assistant.model,
        "loaded sgwi config"
    );
    Ok(config)
}

/// Load the per-user config, seeding it from the template on first run.
pub fn load_default() -> Result<SgwiConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no sgwi config yet");
            create_default_config(&path)?;
            Ok(SgwiConfig::default())
        }
        other => other,
    }
}
