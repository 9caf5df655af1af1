use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("agent endpoint is not configured: set {0}")]
    MissingEndpoint(String),

    #[error("invalid agent endpoint {0:?}: expected an http:// or https:// URL")]
    InvalidEndpoint(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Failure to create the remote session. Fatal for the session that
/// produced it; no turns may be sent until a reset.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session creation failed with HTTP {status} | details: {}", details(.body))]
    Status { status: u16, body: String },

    #[error("could not reach the agent service: {0}")]
    Transport(String),

    #[error("session creation timed out after {0}s")]
    Timeout(u64),
}

/// Failure of a single turn. Recoverable: the next turn may proceed.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("agent service returned HTTP {status} | details: {}", details(.body))]
    Status { status: u16, body: String },

    #[error("could not process the query: {0}")]
    Transport(String),

    #[error("agent did not answer within {0}s")]
    Timeout(u64),

    #[error("agent response was not valid JSON: {0}")]
    InvalidBody(String),

    #[error("a turn is already in flight for this session")]
    Busy,
}

/// Failures that end the `agentchat` process.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn details(body: &str) -> &str {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no details"
    } else {
        trimmed
    }
}
