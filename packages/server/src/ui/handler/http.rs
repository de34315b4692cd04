//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::ParticipantName,
    infrastructure::dto::http::{
        JoinRequestDto, MessageDto, ParticipantDto, ReadMessagesQuery, SendMessageRequestDto,
    },
    ui::state::AppState,
    usecase::{HeartbeatError, JoinError, LeaveError, SendMessageError},
};

/// Header carrying the caller's participant name
const USER_HEADER: &str = "User";

/// `User` ヘッダーの値を UTF-8 として取り出す（無い・UTF-8 でない場合は 422）
///
/// 参加者名は非 ASCII を含み得るため `HeaderValue::to_str` は使わない。
fn user_header(headers: &HeaderMap) -> Result<&str, StatusCode> {
    headers
        .get(USER_HEADER)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
        .ok_or_else(|| {
            tracing::warn!("Request without a readable '{}' header", USER_HEADER);
            StatusCode::UNPROCESSABLE_ENTITY
        })
}

/// `User` ヘッダーを参加者名として検証する
fn user_name(headers: &HeaderMap) -> Result<ParticipantName, StatusCode> {
    let raw = user_header(headers)?;
    ParticipantName::new(raw.to_string()).map_err(|e| {
        tracing::warn!("Invalid '{}' header: {}", USER_HEADER, e);
        StatusCode::UNPROCESSABLE_ENTITY
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Register a participant
pub async fn join_participant(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JoinRequestDto>,
) -> Result<(StatusCode, Json<ParticipantDto>), StatusCode> {
    let name = ParticipantName::try_from(body).map_err(|e| {
        tracing::warn!("Rejected join: {}", e);
        StatusCode::UNPROCESSABLE_ENTITY
    })?;

    match state.join_participant_usecase.execute(name).await {
        Ok(participant) => Ok((StatusCode::CREATED, Json(participant.into()))),
        Err(JoinError::AlreadyRegistered(name)) => {
            tracing::warn!("Rejected join: '{}' is already registered", name);
            Err(StatusCode::CONFLICT)
        }
        Err(e @ (JoinError::NoticeFailed { .. } | JoinError::Storage(_))) => {
            tracing::error!("Join failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Get list of active participants
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, StatusCode> {
    let participants = state
        .list_participants_usecase
        .execute()
        .await
        .map_err(|e| {
            tracing::error!("Failed to list participants: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    Ok(Json(
        participants.into_iter().map(ParticipantDto::from).collect(),
    ))
}

/// Refresh the caller's presence
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    let name = user_name(&headers)?;

    match state.heartbeat_usecase.execute(&name).await {
        Ok(_) => Ok(StatusCode::OK),
        Err(HeartbeatError::NotRegistered(name)) => {
            tracing::warn!("Heartbeat from unknown participant '{}'", name);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e @ HeartbeatError::Storage(_)) => {
            tracing::error!("Heartbeat failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Remove the caller from the room
pub async fn leave_participant(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    let name = user_name(&headers)?;

    match state.leave_participant_usecase.execute(&name).await {
        Ok(_) => Ok(StatusCode::OK),
        Err(LeaveError::NotRegistered(name)) => {
            tracing::warn!("Leave from unknown participant '{}'", name);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e @ (LeaveError::NoticeFailed { .. } | LeaveError::Storage(_))) => {
            tracing::error!("Leave failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Append a message from the caller
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<SendMessageRequestDto>,
) -> Result<(StatusCode, Json<MessageDto>), StatusCode> {
    let from = user_name(&headers)?;
    let (to, text, kind) = body.into_domain().map_err(|e| {
        tracing::warn!("Rejected message from '{}': {}", from, e);
        StatusCode::UNPROCESSABLE_ENTITY
    })?;

    match state
        .send_message_usecase
        .execute(from, to, text, kind)
        .await
    {
        Ok(message) => Ok((StatusCode::CREATED, Json(message.into()))),
        Err(e @ (SendMessageError::Invalid(_) | SendMessageError::SenderNotActive(_))) => {
            tracing::warn!("Rejected message: {}", e);
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(e @ (SendMessageError::Log(_) | SendMessageError::Storage(_))) => {
            tracing::error!("Failed to append message: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Get the most recent messages visible to the caller
pub async fn read_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ReadMessagesQuery>,
) -> Result<Json<Vec<MessageDto>>, StatusCode> {
    let viewer = user_header(&headers)?;

    let messages = state
        .read_messages_usecase
        .execute(viewer.trim(), query.parsed_limit())
        .await
        .map_err(|e| {
            tracing::error!("Failed to read messages: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    // Domain Model から DTO への変換
    Ok(Json(messages.into_iter().map(MessageDto::from).collect()))
}
