//! Request bodies sent to the agent service.

use serde::Serialize;

/// Body of `POST {base}/run`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest<'a> {
    pub app_name: &'a str,
    pub user_id: &'a str,
    pub session_id: &'a str,
    pub new_message: NewMessage<'a>,
}

/// A single user message.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage<'a> {
    pub role: &'static str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

impl<'a> NewMessage<'a> {
    pub fn user(text: &'a str) -> Self {
        Self {
            role: "user",
            parts: vec![Part { text }],
        }
    }
}
