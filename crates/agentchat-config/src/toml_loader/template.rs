//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# agentchat configuration
# Only override what you want to change -- missing fields use defaults.

[agent]
# Base URL of the agent service. AGENT_API_ENDPOINT takes precedence.
# endpoint = "http://localhost:8000"
# app_name = "dcc-helper"
# user_id = "chat-user"

[timeouts]
# connect_secs = 10      # 1-30
# session_secs = 30      # 1-30
# turn_secs = 120        # 1-300

[display]
# title = "Chat with DCC Helper"
# typing_effect = true
# word_delay_ms = 20     # 0-500

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
