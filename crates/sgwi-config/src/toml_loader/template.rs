//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# SGWI Paper Assistant Configuration
# Only override what you want to change -- missing fields use defaults.
# The question quota (5 per rolling minute) is fixed and cannot be changed here.

[assistant]
# model = "gemini-2.5-flash"
# temperature = 0.3          # 0.0-2.0
# max_output_tokens = 2048   # 1-65536
# api_key_env = "GEMINI_API_KEY"   # falls back to API_KEY
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# connect_timeout_secs = 10  # 1-60
# request_timeout_secs = 120 # 5-600

[chat]
# greeting = true
# show_header = true

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
}
