//! Configuration validation.
//!
//! The endpoint check is fatal on its own; numeric ranges are collected
//! and reported together.

use crate::env::ENDPOINT_ENV;
use crate::schema::ChatConfig;
use agentchat_common::ConfigError;

/// Run all validations on a fully resolved config.
pub fn validate(config: &ChatConfig) -> Result<(), ConfigError> {
    validate_endpoint(config)?;
    validate_ranges(config)
}

/// The endpoint must be present and be an http(s) URL without whitespace.
pub fn validate_endpoint(config: &ChatConfig) -> Result<(), ConfigError> {
    let base = config
        .agent
        .base_url()
        .ok_or_else(|| ConfigError::MissingEndpoint(ENDPOINT_ENV.into()))?;

    let host = base
        .strip_prefix("https://")
        .or_else(|| base.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidEndpoint(base.into()))?;
    if host.is_empty() || host.starts_with('/') || base.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidEndpoint(base.into()));
    }
    Ok(())
}

/// Check every numeric and identifier constraint, collecting all errors.
pub fn validate_ranges(config: &ChatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(&mut errors, "timeouts.connect_secs", config.timeouts.connect_secs, 1, 30);
    validate_range(&mut errors, "timeouts.session_secs", config.timeouts.session_secs, 1, 30);
    validate_range(&mut errors, "timeouts.turn_secs", config.timeouts.turn_secs, 1, 300);
    validate_range(&mut errors, "display.word_delay_ms", config.display.word_delay_ms, 0, 500);

    validate_path_segment(&mut errors, "agent.app_name", &config.agent.app_name);
    validate_path_segment(&mut errors, "agent.user_id", &config.agent.user_id);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// App name and user id are interpolated into URL paths.
fn validate_path_segment(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.is_empty() {
        errors.push(format!("{name} must not be empty"));
    } else if value.contains(['/', '?', '#']) || value.chars().any(char::is_whitespace) {
        errors.push(format!("{name} = {value:?} must be a single URL path segment"));
    }
}
