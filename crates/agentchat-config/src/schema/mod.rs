//! Configuration schema types for agentchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod agent;
mod display;
mod logging;
mod timeouts;

pub use agent::*;
pub use display::*;
pub use logging::*;
pub use timeouts::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    pub agent: AgentConfig,
    pub timeouts: TimeoutConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}
