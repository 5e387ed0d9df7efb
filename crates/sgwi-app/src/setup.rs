//! Process setup: environment, logging, and the answer provider.

use std::path::Path;
use std::time::Duration;

use sgwi_ai::{AiError, GeminiClient, GeminiConfig, PaperAgent, PaperInfo};
use sgwi_common::ConfigError;
use sgwi_config::{AssistantConfig, SgwiConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the environment win.
pub fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/sgwi-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in parse_dotenv(&contents) {
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
            return;
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key, value)
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Resolve the configuration before logging is up.
///
/// A file named with `--config` must load and validate. A broken default
/// file falls back to built-in defaults; its error is handed back so it can
/// be logged once the subscriber is installed.
pub fn load_settings(
    path: Option<&Path>,
) -> sgwi_common::Result<(SgwiConfig, Option<ConfigError>)> {
    match sgwi_config::load_config(path) {
        Ok(config) => Ok((config, None)),
        Err(e) if path.is_some() => Err(e.into()),
        Err(e) => Ok((SgwiConfig::default(), Some(e))),
    }
}

/// Install the global `tracing` subscriber, writing to stderr so the chat
/// transcript on stdout stays clean.
pub fn init_logging(directive: &str) {
    let directive = directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

/// Map the `[assistant]` section onto a client config for `api_key`.
pub fn gemini_config(assistant: &AssistantConfig, api_key: String) -> GeminiConfig {
    let config = GeminiConfig::new(api_key)
        .with_model(&assistant.model)
        .with_temperature(assistant.temperature)
        .with_max_tokens(assistant.max_output_tokens)
        .with_timeouts(
            Duration::from_secs(u64::from(assistant.connect_timeout_secs)),
            Duration::from_secs(u64::from(assistant.request_timeout_secs)),
        );
    match &assistant.base_url {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

/// Build the paper agent. A missing key is not fatal here: the agent is
/// still returned and reports the problem on each question.
pub fn build_agent(assistant: &AssistantConfig) -> PaperAgent {
    let client: Result<GeminiClient, AiError> = GeminiConfig::from_env(&assistant.api_key_env)
        .map(|c| gemini_config(assistant, c.api_key))
        .and_then(GeminiClient::new);

    match &client {
        Ok(c) => tracing::info!(model = %c.config().model, "assistant ready"),
        Err(e) => tracing::warn!("assistant unavailable: {e}"),
    }

    PaperAgent::new(PaperInfo::sgwi(), client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgwi_common::AssistantError;

    #[test]
    fn dotenv_lines_are_parsed() {
        let parsed = parse_dotenv(
            "# comment\n\nGEMINI_API_KEY=\"abc\"\nexport OTHER = 'x y'\nnot a pair\n=novalue\n",
        );
        assert_eq!(parsed, vec![("GEMINI_API_KEY", "abc"), ("OTHER", "x y")]);
    }

    #[test]
    fn gemini_config_follows_assistant_section() {
        let mut assistant = AssistantConfig::default();
        assistant.model = "gemini-2.0-flash".into();
        assistant.temperature = 0.1;
        assistant.max_output_tokens = 777;
        assistant.request_timeout_secs = 30;
        assistant.base_url = Some("http://127.0.0.1:9/models/".into());

        let config = gemini_config(&assistant, "k".into());
        assert_eq!(config.api_key, "k");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.max_tokens, 777);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.base_url, "http://127.0.0.1:9/models");
    }

    #[test]
    fn explicit_config_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[assistant]\nmodel = \"gemini-2.0-flash\"\n").unwrap();

        let (config, fallback) = load_settings(Some(&path)).unwrap();
        assert_eq!(config.assistant.model, "gemini-2.0-flash");
        assert!(fallback.is_none());
    }

    #[test]
    fn broken_explicit_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[assistant]\ntemperature = 7.5\n").unwrap();

        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, AssistantError::Config(ConfigError::ValidationError(_))));
        assert!(err.to_string().contains("assistant.temperature"));
    }

    #[test]
    fn missing_explicit_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, AssistantError::Config(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn agent_without_key_is_unconfigured() {
        if std::env::var(sgwi_ai::gemini::FALLBACK_API_KEY_ENV).is_ok() {
            return;
        }
        let mut assistant = AssistantConfig::default();
        assistant.api_key_env = "SGWI_APP_TEST_NO_SUCH_KEY".into();
        assert!(!build_agent(&assistant).is_configured());
    }
}
