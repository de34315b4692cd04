//! Test fixtures: boots the chat router on an ephemeral port.

use std::{sync::Arc, time::Duration};

use lobby_server::{
    domain::{MessageLog, ParticipantRegistry},
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    ui::{build_router, state::AppState},
    usecase::{
        HeartbeatUseCase, JoinParticipantUseCase, LeaveParticipantUseCase,
        ListParticipantsUseCase, PresenceConfig, PresenceSweeper, ReadMessagesUseCase,
        SendMessageUseCase,
    },
};
use lobby_shared::time::{Clock, ManualClock};
use reqwest::header::HeaderValue;
use tokio::task::JoinHandle;

/// 2023-01-01 00:00:00 JST
pub const START_MILLIS: i64 = 1672498800000;

pub const STALE_AFTER: Duration = Duration::from_secs(10);

/// `User` header value carrying `user` as raw UTF-8 bytes
pub fn user_header(user: &str) -> HeaderValue {
    HeaderValue::from_bytes(user.as_bytes()).expect("Invalid header value")
}

/// Helper struct to manage an in-process server
pub struct TestServer {
    pub base_url: String,
    pub clock: Arc<ManualClock>,
    pub sweeper: Arc<PresenceSweeper>,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server on an ephemeral port
    pub async fn start() -> Self {
        let clock = Arc::new(ManualClock::new(START_MILLIS));
        let shared_clock: Arc<dyn Clock> = clock.clone();

        let registry = Arc::new(ParticipantRegistry::new(
            Arc::new(InMemoryParticipantRepository::new()),
            shared_clock.clone(),
        ));
        let message_log = Arc::new(MessageLog::new(
            Arc::new(InMemoryMessageRepository::new()),
            shared_clock,
        ));

        let state = Arc::new(AppState {
            join_participant_usecase: Arc::new(JoinParticipantUseCase::new(
                registry.clone(),
                message_log.clone(),
            )),
            list_participants_usecase: Arc::new(ListParticipantsUseCase::new(registry.clone())),
            heartbeat_usecase: Arc::new(HeartbeatUseCase::new(registry.clone())),
            leave_participant_usecase: Arc::new(LeaveParticipantUseCase::new(
                registry.clone(),
                message_log.clone(),
            )),
            send_message_usecase: Arc::new(SendMessageUseCase::new(
                registry.clone(),
                message_log.clone(),
            )),
            read_messages_usecase: Arc::new(ReadMessagesUseCase::new(message_log.clone())),
        });
        let sweeper = Arc::new(PresenceSweeper::new(
            registry,
            message_log,
            PresenceConfig {
                stale_after: STALE_AFTER,
                ..PresenceConfig::default()
            },
        ));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, build_router(state))
                .await
                .expect("Test server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            clock,
            sweeper,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /participants
    pub async fn join(&self, name: &str) -> reqwest::Response {
        self.client
            .post(self.url("/participants"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .expect("Failed to send join request")
    }

    /// POST /status
    pub async fn heartbeat(&self, user: &str) -> reqwest::Response {
        self.client
            .post(self.url("/status"))
            .header("User", user_header(user))
            .send()
            .await
            .expect("Failed to send heartbeat")
    }

    /// POST /messages
    pub async fn send(&self, user: &str, to: &str, text: &str, kind: &str) -> reqwest::Response {
        self.client
            .post(self.url("/messages"))
            .header("User", user_header(user))
            .json(&serde_json::json!({ "to": to, "text": text, "type": kind }))
            .send()
            .await
            .expect("Failed to send message")
    }

    /// GET /messages with a raw query string (e.g. `"limit=abc"`)
    pub async fn read_with_query(&self, user: &str, query: &str) -> reqwest::Response {
        self.client
            .get(self.url(&format!("/messages?{}", query)))
            .header("User", user_header(user))
            .send()
            .await
            .expect("Failed to read messages")
    }

    /// GET /messages as `user`, returning the decoded body
    pub async fn read(&self, user: &str, limit: Option<i64>) -> Vec<serde_json::Value> {
        let mut request = self
            .client
            .get(self.url("/messages"))
            .header("User", user_header(user));
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        let response = request.send().await.expect("Failed to read messages");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Failed to decode messages")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Stop the server task when the test ends
        self.handle.abort();
    }
}
