//! Lifecycle transitions for the chat front end.

use tracing::{debug, error, info};

use agentchat_client::{AgentService, SessionOutcome};
use agentchat_common::{Notice, NoticeQueue, SessionError};

use super::types::{AppState, Phase, Turn};

/// Why a message was not submitted.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message is empty")]
    Empty,

    #[error("chat is disabled: {0}. Type /new to start a new chat")]
    Blocked(String),

    #[error("chat is not ready yet")]
    NotReady,
}

/// Owns the chat state and drives it through the agent service.
pub struct ChatController<S> {
    service: S,
    state: AppState,
    notices: NoticeQueue,
}

impl<S: AgentService> ChatController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: AppState::default(),
            notices: NoticeQueue::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.state.transcript
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Notices raised since the last call, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Open the first session. Does nothing once a session has been
    /// attempted; use [`reset`](Self::reset) to start over.
    pub async fn start(&mut self) -> Result<(), SessionError> {
        if self.state.phase != Phase::Uninitialized {
            debug!(phase = ?self.state.phase, "start ignored, session already attempted");
            return Ok(());
        }
        self.open_session().await
    }

    /// Discard the session and transcript and open a new session.
    pub async fn reset(&mut self) -> Result<(), SessionError> {
        info!("resetting chat");
        self.state = AppState::default();
        self.open_session().await
    }

    async fn open_session(&mut self) -> Result<(), SessionError> {
        let session = self.service.new_session();
        self.state.phase = Phase::SessionPending;
        self.notices.push(Notice::info(format!(
            "Creating agent session {}...",
            session.session_id()
        )));

        match self.service.ensure_remote_session(&session).await {
            Ok(outcome) => {
                match outcome {
                    SessionOutcome::Created => {
                        self.notices.push(Notice::success("Session created."));
                    }
                    SessionOutcome::AlreadyExists => {
                        self.notices
                            .push(Notice::warning("Session already exists on the server. Reusing id."));
                    }
                }
                info!(session_id = %session.session_id(), ?outcome, "chat ready");
                self.state.session = Some(session);
                self.state.phase = Phase::Ready;
                Ok(())
            }
            Err(e) => {
                error!(session_id = %session.session_id(), error = %e, "session creation failed");
                self.notices.push(Notice::error(format!(
                    "Could not create a session on the agent service. Check the endpoint and permissions. {e}"
                )));
                self.state.session = None;
                self.state.phase = Phase::Blocked {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Send one user message and append both turns to the transcript.
    /// Returns the assistant turn.
    ///
    /// The text is sent as typed. Turn failures do not fail this call:
    /// they become the assistant turn and the controller returns to `Ready`.
    pub async fn submit(&mut self, text: &str) -> Result<Turn, SubmitError> {
        if text.trim().is_empty() {
            return Err(SubmitError::Empty);
        }

        match &self.state.phase {
            Phase::Ready => {}
            Phase::Blocked { reason } => return Err(SubmitError::Blocked(reason.clone())),
            _ => return Err(SubmitError::NotReady),
        }
        let Some(session) = self.state.session.as_ref() else {
            return Err(SubmitError::NotReady);
        };

        self.state.transcript.push(Turn::user(text));
        self.state.phase = Phase::SendingTurn;

        let reply_turn = match self.service.send_turn(session, text).await {
            Ok(reply) => Turn::from_reply(&reply),
            Err(e) => Turn::from_error(&e),
        };

        self.state.transcript.push(reply_turn.clone());
        self.state.phase = Phase::Ready;
        Ok(reply_turn)
    }
}
