//! Validation for the `[assistant]` section.

use crate::schema::SgwiConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

/// Validate answer provider settings.
pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &SgwiConfig) {
    let assistant = &config.assistant;

    validate_not_blank(errors, "assistant.model", &assistant.model);
    validate_not_blank(errors, "assistant.api_key_env", &assistant.api_key_env);
    validate_range_f64(
        errors,
        "assistant.temperature",
        assistant.temperature,
        0.0,
        2.0,
    );
    validate_range(
        errors,
        "assistant.max_output_tokens",
        assistant.max_output_tokens,
        1,
        65_536,
    );
    validate_range(
        errors,
        "assistant.connect_timeout_secs",
        assistant.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "assistant.request_timeout_secs",
        assistant.request_timeout_secs,
        5,
        600,
    );

    if let Some(url) = &assistant.base_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!(
                "assistant.base_url = {url:?} must start with http:// or https://"
            ));
        }
    }
}
