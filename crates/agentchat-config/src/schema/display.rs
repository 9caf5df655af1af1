//! Terminal presentation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Banner printed at startup.
    pub title: String,
    /// Print replies word by word.
    pub typing_effect: bool,
    /// Pause between words when `typing_effect` is on.
    pub word_delay_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Chat with DCC Helper".into(),
            typing_effect: true,
            word_delay_ms: 20,
        }
    }
}
