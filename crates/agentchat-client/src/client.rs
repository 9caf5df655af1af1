//! `AgentClient`: the HTTP-backed `AgentService`.

use std::error::Error as _;

use async_trait::async_trait;

use agentchat_common::{ConfigError, SessionError, TurnError};

use crate::config::ServiceConfig;
use crate::event::Reply;
use crate::session::{Session, SessionManager, SessionOutcome};
use crate::turn::TurnClient;
use crate::AgentService;

/// Session and turn clients sharing one connection pool.
pub struct AgentClient {
    sessions: SessionManager,
    turns: TurnClient,
}

impl AgentClient {
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        let http = build_http(&config)?;
        Ok(Self {
            sessions: SessionManager::new(&config, http.clone()),
            turns: TurnClient::new(&config, http),
        })
    }
}

#[async_trait]
impl AgentService for AgentClient {
    fn new_session(&self) -> Session {
        self.sessions.new_session()
    }

    async fn ensure_remote_session(
        &self,
        session: &Session,
    ) -> Result<SessionOutcome, SessionError> {
        self.sessions.ensure_remote_session(session).await
    }

    async fn send_turn(&self, session: &Session, text: &str) -> Result<Reply, TurnError> {
        self.turns.send_turn(session, text).await
    }
}

/// Per-request timeouts are set by each caller; only the connect
/// timeout lives on the shared client.
fn build_http(config: &ServiceConfig) -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .user_agent(concat!("agentchat/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ConfigError::HttpClient(e.to_string()))
}

/// Render a transport failure including its source chain, which is where
/// reqwest keeps the DNS or connection-refused detail.
pub(crate) fn describe_transport_error(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
