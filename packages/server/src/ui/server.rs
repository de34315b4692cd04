//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    HeartbeatUseCase, JoinParticipantUseCase, LeaveParticipantUseCase, ListParticipantsUseCase,
    PresenceSweeper, ReadMessagesUseCase, SendMessageUseCase,
};

use super::{
    handler::{
        health_check, heartbeat, join_participant, leave_participant, list_participants,
        read_messages, send_message,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Build the HTTP router for the given state
pub fn build_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/participants",
            post(join_participant)
                .get(list_participants)
                .delete(leave_participant),
        )
        .route("/status", post(heartbeat))
        .route("/messages", post(send_message).get(read_messages))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// HTTP chat server
///
/// Serves the chat API and drives the presence sweeper for as long as the
/// server is running.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     join_participant_usecase,
///     list_participants_usecase,
///     heartbeat_usecase,
///     leave_participant_usecase,
///     send_message_usecase,
///     read_messages_usecase,
///     presence_sweeper,
/// );
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    app_state: Arc<AppState>,
    /// PresenceSweeper（無応答参加者の掃除）
    presence_sweeper: Arc<PresenceSweeper>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        join_participant_usecase: Arc<JoinParticipantUseCase>,
        list_participants_usecase: Arc<ListParticipantsUseCase>,
        heartbeat_usecase: Arc<HeartbeatUseCase>,
        leave_participant_usecase: Arc<LeaveParticipantUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        read_messages_usecase: Arc<ReadMessagesUseCase>,
        presence_sweeper: Arc<PresenceSweeper>,
    ) -> Self {
        let app_state = Arc::new(AppState {
            join_participant_usecase,
            list_participants_usecase,
            heartbeat_usecase,
            leave_participant_usecase,
            send_message_usecase,
            read_messages_usecase,
        });
        Self {
            app_state,
            presence_sweeper,
        }
    }

    /// Run the HTTP chat server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = build_router(self.app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);

        let sweeper = self.presence_sweeper.spawn();
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        sweeper.abort();
        served?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
