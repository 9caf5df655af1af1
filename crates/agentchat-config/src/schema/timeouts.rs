//! HTTP timeout configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bounds on how long each remote call may block the caller.
///
/// Turn submission gets the long budget because the remote agent may
/// itself call tools and models before answering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    pub connect_secs: u64,
    pub session_secs: u64,
    pub turn_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 10,
            session_secs: 30,
            turn_secs: 120,
        }
    }
}

impl TimeoutConfig {
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }

    pub fn session(&self) -> Duration {
        Duration::from_secs(self.session_secs)
    }

    pub fn turn(&self) -> Duration {
        Duration::from_secs(self.turn_secs)
    }
}
