//! Remote agent service addressing.

use serde::{Deserialize, Serialize};

/// Which agent to talk to and as whom.
///
/// `app_name` and `user_id` are fixed per deployment; the front end is
/// single-tenant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    /// Base URL of the agent service. Usually supplied via
    /// `AGENT_API_ENDPOINT` rather than the file.
    pub endpoint: Option<String>,
    pub app_name: String,
    pub user_id: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            app_name: "dcc-helper".into(),
            user_id: "chat-user".into(),
        }
    }
}

impl AgentConfig {
    /// The endpoint with any trailing slashes removed, if set.
    pub fn base_url(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(|e| e.trim().trim_end_matches('/'))
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trims_trailing_slashes() {
        let cfg = AgentConfig {
            endpoint: Some("https://agent.example.com//".into()),
            ..Default::default()
        };
        assert_eq!(cfg.base_url(), Some("https://agent.example.com"));
    }

    #[test]
    fn blank_endpoint_counts_as_missing() {
        let cfg = AgentConfig {
            endpoint: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(cfg.base_url(), None);
        assert_eq!(AgentConfig::default().base_url(), None);
    }
}
