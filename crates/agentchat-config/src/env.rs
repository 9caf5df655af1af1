//! Environment variables and `.env` file support.

use std::path::{Path, PathBuf};

use crate::schema::ChatConfig;

/// Names the base URL of the remote agent service.
pub const ENDPOINT_ENV: &str = "AGENT_API_ENDPOINT";

/// Parse `.env` contents with dotenv quoting and comment rules.
/// Lines that do not parse are skipped.
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    dotenvy::from_read_iter(contents.as_bytes())
        .filter_map(Result::ok)
        .collect()
}

/// Load the first `.env` file found among `candidates`.
///
/// Variables already present in the process environment are left alone.
/// Returns the path that was loaded, if any. Must run before any other
/// thread is started.
pub fn load_dotenv(candidates: &[PathBuf]) -> Option<PathBuf> {
    for path in candidates {
        let Ok(contents) = std::fs::read_to_string(path) else {
            continue;
        };
        for (key, value) in parse_dotenv(&contents) {
            if std::env::var_os(&key).is_none() {
                std::env::set_var(key, value);
            }
        }
        return Some(path.clone());
    }
    None
}

/// Default `.env` locations: the current directory, then `root` if given.
pub fn dotenv_candidates(root: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(root) = root {
        candidates.push(root.join(".env"));
    }
    candidates
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env(config: &mut ChatConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
        config.agent.endpoint = Some(endpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dotenv_handles_comments_and_quotes() {
        let parsed = parse_dotenv(
            r#"
# comment
AGENT_API_ENDPOINT="https://agent.example.com"
RUST_LOG='debug'
MALFORMED
=novalue
"#,
        );
        assert_eq!(
            parsed,
            vec![
                (
                    "AGENT_API_ENDPOINT".to_string(),
                    "https://agent.example.com".to_string()
                ),
                ("RUST_LOG".to_string(), "debug".to_string()),
            ]
        );
    }

    #[test]
    fn parse_dotenv_strips_inline_comment() {
        let parsed = parse_dotenv("AGENT_API_ENDPOINT=http://localhost:8000 # local dev\n");
        assert_eq!(
            parsed,
            vec![(
                "AGENT_API_ENDPOINT".to_string(),
                "http://localhost:8000".to_string()
            )]
        );
    }

    #[test]
    fn dotenv_endpoint_with_inline_comment_resolves_clean() {
        let parsed = parse_dotenv("AGENT_API_ENDPOINT=http://localhost:8000 # local dev\n");
        let config = crate::resolve(
            ChatConfig::default(),
            |key| {
                parsed
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.clone())
            },
            None,
        )
        .unwrap();
        assert_eq!(config.agent.base_url(), Some("http://localhost:8000"));
    }

    #[test]
    fn load_dotenv_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.env");
        std::fs::write(&present, "AGENTCHAT_TEST_DOTENV_ONLY=1\n").unwrap();

        let loaded = load_dotenv(&[dir.path().join("missing.env"), present.clone()]);
        assert_eq!(loaded, Some(present));
        assert_eq!(
            std::env::var("AGENTCHAT_TEST_DOTENV_ONLY").as_deref(),
            Ok("1")
        );
    }

    #[test]
    fn env_endpoint_overrides_file() {
        let mut config = ChatConfig::default();
        config.agent.endpoint = Some("http://from-file".into());
        apply_env(&mut config, |key| {
            (key == ENDPOINT_ENV).then(|| "https://from-env".to_string())
        });
        assert_eq!(config.agent.endpoint.as_deref(), Some("https://from-env"));
    }

    #[test]
    fn blank_env_endpoint_is_ignored() {
        let mut config = ChatConfig::default();
        config.agent.endpoint = Some("http://from-file".into());
        apply_env(&mut config, |_| Some("  ".to_string()));
        assert_eq!(config.agent.endpoint.as_deref(), Some("http://from-file"));
    }

    #[test]
    fn dotenv_candidates_include_root() {
        let candidates = dotenv_candidates(Some(Path::new("/srv/app")));
        assert_eq!(candidates[0], PathBuf::from(".env"));
        assert_eq!(candidates[1], PathBuf::from("/srv/app/.env"));
    }
}
