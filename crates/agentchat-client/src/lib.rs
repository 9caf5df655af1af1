//! HTTP client for a hosted agent service.
//!
//! Provides:
//! - `SessionManager`: session id generation and idempotent remote creation
//! - `TurnClient`: single-turn submission with reply extraction
//! - `AgentClient`: both behind the `AgentService` trait

pub mod api;
pub mod client;
pub mod config;
pub mod event;
pub mod session;
pub mod turn;

use async_trait::async_trait;

use agentchat_common::{SessionError, TurnError};

pub use client::AgentClient;
pub use config::ServiceConfig;
pub use event::{extract_reply, AgentEvent, Reply, NO_TEXT_MESSAGE};
pub use session::{Session, SessionManager, SessionOutcome};
pub use turn::TurnClient;

/// The operations a chat front end needs from the agent service.
#[async_trait]
pub trait AgentService: Send + Sync {
    /// Allocate a fresh session locally. No network call.
    fn new_session(&self) -> Session;

    /// Make sure `session` exists remotely. "Already exists" is success.
    async fn ensure_remote_session(&self, session: &Session)
        -> Result<SessionOutcome, SessionError>;

    /// Send one user message and return the agent's reply.
    async fn send_turn(&self, session: &Session, text: &str) -> Result<Reply, TurnError>;
}
