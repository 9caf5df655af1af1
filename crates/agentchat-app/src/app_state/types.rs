//! State types for the chat front end.

use agentchat_client::{Reply, Session};
use agentchat_common::TurnError;

/// Where the front end is in the session lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No session exists yet.
    Uninitialized,
    /// Session generated locally, remote creation in flight.
    SessionPending,
    /// Remote session confirmed; one turn may be submitted.
    Ready,
    /// A turn is in flight.
    SendingTurn,
    /// Remote session creation failed. Only a reset leaves this state.
    Blocked { reason: String },
}

impl Phase {
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// What an assistant turn represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    Message,
    /// The agent answered but nothing in the trace carried text.
    NoText,
    /// The request failed; the text describes the failure.
    Error,
}

/// One entry in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub kind: TurnKind,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            kind: TurnKind::Message,
        }
    }

    pub fn from_reply(reply: &Reply) -> Self {
        let kind = match reply {
            Reply::Text(_) => TurnKind::Message,
            Reply::NoText => TurnKind::NoText,
        };
        Self {
            role: Role::Assistant,
            text: reply.display_text().to_string(),
            kind,
        }
    }

    pub fn from_error(err: &TurnError) -> Self {
        Self {
            role: Role::Assistant,
            text: format!("Error: {err}"),
            kind: TurnKind::Error,
        }
    }
}

/// Everything the front end knows about the current conversation.
#[derive(Debug)]
pub struct AppState {
    pub session: Option<Session>,
    pub transcript: Vec<Turn>,
    pub phase: Phase,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: None,
            transcript: Vec::new(),
            phase: Phase::Uninitialized,
        }
    }
}
