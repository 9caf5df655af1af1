pub mod errors;
pub mod id;
pub mod notifications;

pub use errors::{ChatError, ConfigError, SessionError, TurnError};
pub use id::{new_correlation_id, new_id, SessionId, SESSION_ID_PREFIX};
pub use notifications::{Notice, NoticeLevel, NoticeQueue};
