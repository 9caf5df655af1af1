//! Agent service client configuration.

use std::time::Duration;

/// Where the agent service lives and how long each call may take.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub app_name: String,
    pub user_id: String,
    pub connect_timeout: Duration,
    pub session_timeout: Duration,
    pub turn_timeout: Duration,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            app_name: "dcc-helper".to_string(),
            user_id: "chat-user".to_string(),
            connect_timeout: Duration::from_secs(10),
            session_timeout: Duration::from_secs(30),
            turn_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_session_timeout(mut self, timeout: Duration) -> Self {
        self.session_timeout = timeout;
        self
    }

    pub fn with_turn_timeout(mut self, timeout: Duration) -> Self {
        self.turn_timeout = timeout;
        self
    }
}
