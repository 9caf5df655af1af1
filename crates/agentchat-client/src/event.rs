//! Agent events and reply extraction.
//!
//! The `/run` endpoint answers with the agent's whole execution trace:
//! tool calls, tool results, intermediate steps and finally the model's
//! message. Only events with text in their first content part count.

use serde_json::Value;

/// Shown in place of a reply when the trace carries no text.
pub const NO_TEXT_MESSAGE: &str = "No answer text found in the agent response.";

/// One element of the agent's execution trace.
#[derive(Debug, Clone, Copy)]
pub struct AgentEvent<'a>(&'a Value);

impl<'a> AgentEvent<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// Text of the first content part, if present and non-empty.
    pub fn text(&self) -> Option<&'a str> {
        let parts = self.0.get("content")?.get("parts")?.as_array()?;
        parts
            .first()?
            .get("text")?
            .as_str()
            .filter(|t| !t.is_empty())
    }
}

/// Outcome of a successful turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The last text-bearing event's text.
    Text(String),
    /// The response parsed but nothing in it carried text.
    NoText,
}

impl Reply {
    /// The string to show the user for this reply.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::NoText => NO_TEXT_MESSAGE,
        }
    }
}

/// Scan the event list backwards and return the first text found.
///
/// A body that is not an array yields [`Reply::NoText`], as does an array
/// with no text-bearing event.
pub fn extract_reply(body: &Value) -> Reply {
    let Some(events) = body.as_array() else {
        return Reply::NoText;
    };

    events
        .iter()
        .rev()
        .map(AgentEvent::new)
        .find_map(|event| event.text())
        .map(|text| Reply::Text(text.to_string()))
        .unwrap_or(Reply::NoText)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn last_text_bearing_event_wins() {
        let body = json!([
            {"content": {"parts": [{"text": "A"}]}},
            {"content": {"parts": [{"text": "B"}]}},
        ]);
        assert_eq!(extract_reply(&body), Reply::Text("B".into()));
    }

    #[test]
    fn events_without_text_are_skipped() {
        let body = json!([
            {"content": {}},
            {"content": {"parts": [{"text": "B"}]}},
            {"toolCall": {}},
        ]);
        assert_eq!(extract_reply(&body), Reply::Text("B".into()));
    }

    #[test]
    fn empty_list_is_no_text() {
        assert_eq!(extract_reply(&json!([])), Reply::NoText);
    }

    #[test]
    fn tool_calls_only_is_no_text() {
        assert_eq!(extract_reply(&json!([{"toolCall": {}}])), Reply::NoText);
    }

    #[test]
    fn non_array_body_is_no_text() {
        assert_eq!(extract_reply(&json!({"detail": "ok"})), Reply::NoText);
        assert_eq!(extract_reply(&json!("text")), Reply::NoText);
        assert_eq!(extract_reply(&Value::Null), Reply::NoText);
    }

    #[test]
    fn empty_text_and_empty_parts_do_not_count() {
        let body = json!([
            {"content": {"parts": [{"text": "final"}]}},
            {"content": {"parts": []}},
            {"content": {"parts": [{"text": ""}]}},
            {"content": null},
        ]);
        assert_eq!(extract_reply(&body), Reply::Text("final".into()));
    }

    #[test]
    fn only_the_first_part_is_inspected() {
        let body = json!([
            {"content": {"parts": [{"text": "answer"}]}},
            {"content": {"parts": [
                {"functionCall": {"name": "execute_sql"}},
                {"text": "ignored"}
            ]}},
        ]);
        assert_eq!(extract_reply(&body), Reply::Text("answer".into()));
    }

    #[test]
    fn function_response_after_text_does_not_hide_it() {
        let body = json!([
            {"author": "dcc-helper", "content": {"role": "model", "parts": [{"functionCall": {}}]}},
            {"author": "dcc-helper", "content": {"role": "user", "parts": [{"functionResponse": {}}]}},
            {"author": "dcc-helper", "content": {"role": "model", "parts": [{"text": "Here is the table."}]}},
            {"author": "dcc-helper", "actions": {"stateDelta": {}}},
        ]);
        assert_eq!(
            extract_reply(&body),
            Reply::Text("Here is the table.".into())
        );
    }

    #[test]
    fn agent_event_text_ignores_author() {
        let value = json!({"author": "root", "content": {"parts": [{"text": "hi"}]}});
        let event = AgentEvent::new(&value);
        assert_eq!(event.text(), Some("hi"));
    }

    #[test]
    fn display_text_for_no_text_is_the_placeholder() {
        assert_eq!(Reply::NoText.display_text(), NO_TEXT_MESSAGE);
        assert_eq!(Reply::Text("x".into()).display_text(), "x");
    }
}
