//! agentchat configuration.
//!
//! A TOML file supplies defaults for the agent addressing, timeouts and
//! display; the `AGENT_API_ENDPOINT` environment variable (optionally from
//! a `.env` file) names the agent service. The resolved config is validated
//! before any session is created.
//!
//! ```rust,no_run
//! use agentchat_config::{load_config, LoadOptions};
//!
//! let config = load_config(&LoadOptions::default()).expect("invalid config");
//! println!("{}", config.agent.app_name);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

use std::path::PathBuf;

pub use env::{apply_env, load_dotenv, ENDPOINT_ENV};
pub use schema::{AgentConfig, ChatConfig, DisplayConfig, LogLevel, LoggingConfig, TimeoutConfig};

use agentchat_common::ConfigError;
use tracing::warn;

/// Where to read config from and what to override on top of it.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file; errors reading it are fatal.
    pub path: Option<PathBuf>,
    /// Endpoint from the command line; beats the environment.
    pub endpoint: Option<String>,
}

/// Load, override and validate the configuration.
///
/// A broken file at the default location only logs a warning and falls
/// back to defaults; a broken file passed explicitly is an error.
pub fn load_config(options: &LoadOptions) -> Result<ChatConfig, ConfigError> {
    let config = match &options.path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default().unwrap_or_else(|e| {
            warn!("config load failed, using defaults: {e}");
            ChatConfig::default()
        }),
    };

    resolve(config, |key| std::env::var(key).ok(), options.endpoint.clone())
}

/// Apply environment and command-line overrides, then validate.
pub fn resolve(
    mut config: ChatConfig,
    lookup: impl Fn(&str) -> Option<String>,
    endpoint_override: Option<String>,
) -> Result<ChatConfig, ConfigError> {
    apply_env(&mut config, lookup);
    if let Some(endpoint) = endpoint_override {
        config.agent.endpoint = Some(endpoint);
    }
    if let Some(base) = config.agent.base_url().map(str::to_owned) {
        config.agent.endpoint = Some(base);
    }

    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_without_endpoint_is_config_error() {
        let result = resolve(ChatConfig::default(), |_| None, None);
        assert!(matches!(result, Err(ConfigError::MissingEndpoint(_))));
    }

    #[test]
    fn resolve_prefers_cli_over_env() {
        let config = resolve(
            ChatConfig::default(),
            |_| Some("http://env:8000".into()),
            Some("http://cli:9000/".into()),
        )
        .unwrap();
        assert_eq!(config.agent.endpoint.as_deref(), Some("http://cli:9000"));
    }

    #[test]
    fn resolve_uses_env_endpoint() {
        let config = resolve(
            ChatConfig::default(),
            |key| (key == ENDPOINT_ENV).then(|| "https://agent.run.app/".into()),
            None,
        )
        .unwrap();
        assert_eq!(config.agent.base_url(), Some("https://agent.run.app"));
    }

    #[test]
    fn load_config_with_explicit_missing_file_fails() {
        let options = LoadOptions {
            path: Some(PathBuf::from("/tmp/agentchat_missing_explicit.toml")),
            endpoint: Some("http://localhost:8000".into()),
        };
        assert!(matches!(
            load_config(&options),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn load_config_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[agent]\nuser_id = \"qa-user\"\n").unwrap();

        let options = LoadOptions {
            path: Some(path),
            endpoint: Some("http://localhost:8000".into()),
        };
        let config = load_config(&options).unwrap();
        assert_eq!(config.agent.user_id, "qa-user");
        assert_eq!(config.agent.endpoint.as_deref(), Some("http://localhost:8000"));
    }
}
