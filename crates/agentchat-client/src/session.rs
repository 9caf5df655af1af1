//! Session identity and remote session creation.

use std::time::Duration;

use tracing::{debug, info, warn};

use agentchat_common::{SessionError, SessionId};

use crate::client::describe_transport_error;
use crate::config::ServiceConfig;

/// A server-side conversation context, addressed by
/// (app name, user id, session id). Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    session_id: SessionId,
    user_id: String,
    app_name: String,
}

impl Session {
    pub fn new(app_name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            session_id: SessionId::new(),
            user_id: user_id.into(),
            app_name: app_name.into(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

/// How the remote service answered a creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Created,
    /// 409: the id was created by an earlier request and is reused.
    AlreadyExists,
}

/// Creates sessions locally and registers them with the agent service.
pub struct SessionManager {
    http: reqwest::Client,
    base_url: String,
    app_name: String,
    user_id: String,
    timeout: Duration,
}

impl SessionManager {
    pub fn new(config: &ServiceConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            app_name: config.app_name.clone(),
            user_id: config.user_id.clone(),
            timeout: config.session_timeout,
        }
    }

    /// Generate a fresh session with the configured user and app.
    pub fn new_session(&self) -> Session {
        Session::new(&self.app_name, &self.user_id)
    }

    pub(crate) fn session_url(&self, session: &Session) -> String {
        format!(
            "{}/apps/{}/users/{}/sessions/{}",
            self.base_url,
            session.app_name(),
            session.user_id(),
            session.session_id()
        )
    }

    /// Register `session` with the agent service. No retries.
    pub async fn ensure_remote_session(
        &self,
        session: &Session,
    ) -> Result<SessionOutcome, SessionError> {
        let url = self.session_url(session);
        debug!(session_id = %session.session_id(), %url, "creating remote session");

        let response = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SessionError::Timeout(self.timeout.as_secs())
                } else {
                    SessionError::Transport(describe_transport_error(&e))
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::CONFLICT {
            warn!(session_id = %session.session_id(), "session already exists, reusing id");
            return Ok(SessionOutcome::AlreadyExists);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SessionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!(session_id = %session.session_id(), "remote session created");
        Ok(SessionOutcome::Created)
    }
}
