//! Turn submission to the agent's `/run` endpoint.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info, warn};

use agentchat_common::{new_correlation_id, TurnError};

use crate::api::{NewMessage, RunRequest};
use crate::client::describe_transport_error;
use crate::config::ServiceConfig;
use crate::event::{extract_reply, Reply};
use crate::session::Session;

/// Clears the `busy` flag on drop, so it is released even if the
/// future is cancelled or returns early.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, TurnError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(TurnError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Sends user messages, at most one in flight at a time.
pub struct TurnClient {
    http: reqwest::Client,
    run_url: String,
    timeout: Duration,
    busy: AtomicBool,
}

impl TurnClient {
    pub fn new(config: &ServiceConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            run_url: format!("{}/run", config.base_url),
            timeout: config.turn_timeout,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether a turn is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Post `text` as a user message and extract the agent's reply.
    ///
    /// Returns [`TurnError::Busy`] without sending anything if another
    /// turn has not resolved yet.
    pub async fn send_turn(&self, session: &Session, text: &str) -> Result<Reply, TurnError> {
        let _guard = BusyGuard::acquire(&self.busy)?;
        let request_id = new_correlation_id();

        let body = RunRequest {
            app_name: session.app_name(),
            user_id: session.user_id(),
            session_id: session.session_id().as_str(),
            new_message: NewMessage::user(text),
        };

        debug!(%request_id, session_id = %session.session_id(), "posting turn");

        let response = self
            .http
            .post(&self.run_url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(&request_id, e))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| self.classify(&request_id, e))?;

        if !status.is_success() {
            warn!(%request_id, status = status.as_u16(), "turn rejected by agent service");
            return Err(TurnError::Status {
                status: status.as_u16(),
                body: raw,
            });
        }

        let json: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| TurnError::InvalidBody(e.to_string()))?;

        let reply = extract_reply(&json);
        match &reply {
            Reply::Text(text) => info!(%request_id, chars = text.len(), "turn answered"),
            Reply::NoText => warn!(%request_id, "agent response carried no text"),
        }
        Ok(reply)
    }

    fn classify(&self, request_id: &str, err: reqwest::Error) -> TurnError {
        if err.is_timeout() {
            warn!(%request_id, timeout_secs = self.timeout.as_secs(), "turn timed out");
            TurnError::Timeout(self.timeout.as_secs())
        } else {
            warn!(%request_id, error = %err, "turn transport failure");
            TurnError::Transport(describe_transport_error(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: &str, timeout: Duration) -> TurnClient {
        let config = ServiceConfig::new(base_url).with_turn_timeout(timeout);
        TurnClient::new(&config, reqwest::Client::new())
    }

    fn session() -> Session {
        Session::new("dcc-helper", "chat-user")
    }

    #[tokio::test]
    async fn posts_run_request_and_extracts_reply() {
        let server = MockServer::start().await;
        let session = session();

        Mock::given(method("POST"))
            .and(path("/run"))
            .and(body_json(json!({
                "appName": "dcc-helper",
                "userId": "chat-user",
                "sessionId": session.session_id().as_str(),
                "newMessage": {"role": "user", "parts": [{"text": "hello"}]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"content": {"parts": [{"functionCall": {"name": "list_table_ids"}}]}},
                {"content": {"parts": [{"text": "hi there"}]}}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server.uri(), Duration::from_secs(5));
        let reply = client.send_turn(&session, "hello").await.unwrap();
        assert_eq!(reply, Reply::Text("hi there".into()));
        assert!(!client.is_busy());
    }

    #[tokio::test]
    async fn trace_without_text_is_no_text_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/run"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"toolCall": {}}])))
            .mount(&server)
            .await;

        let client = client(&server.uri(), Duration::from_secs(5));
        assert_eq!(
            client.send_turn(&session(), "hello").await.unwrap(),
            Reply::NoText
        );
    }

    #[tokio::test]
    async fn http_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/run"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Session not found"))
            .mount(&server)
            .await;

        let client = client(&server.uri(), Duration::from_secs(5));
        match client.send_turn(&session(), "hello").await {
            Err(TurnError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "Session not found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert!(!client.is_busy());
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/run"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&server)
            .await;

        let client = client(&server.uri(), Duration::from_secs(5));
        assert!(matches!(
            client.send_turn(&session(), "hello").await,
            Err(TurnError::InvalidBody(_))
        ));
    }

    #[tokio::test]
    async fn slow_agent_times_out_and_releases_busy_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/run"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = client(&server.uri(), Duration::from_millis(300));
        assert!(matches!(
            client.send_turn(&session(), "hello").await,
            Err(TurnError::Timeout(_))
        ));
        assert!(!client.is_busy());
    }

    #[tokio::test]
    async fn second_turn_while_first_in_flight_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/run"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"content": {"parts": [{"text": "first"}]}}]))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server.uri(), Duration::from_secs(5));
        let session = session();
        let (first, second) = tokio::join!(
            client.send_turn(&session, "one"),
            client.send_turn(&session, "two"),
        );
        assert_eq!(first.unwrap(), Reply::Text("first".into()));
        assert!(matches!(second, Err(TurnError::Busy)));
    }

    #[test]
    fn busy_guard_releases_on_drop() {
        let flag = AtomicBool::new(false);
        {
            let _guard = BusyGuard::acquire(&flag).unwrap();
            assert!(matches!(BusyGuard::acquire(&flag), Err(TurnError::Busy)));
        }
        assert!(BusyGuard::acquire(&flag).is_ok());
    }
}
