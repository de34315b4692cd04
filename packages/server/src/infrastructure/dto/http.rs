//! HTTP API request/response DTOs for the chat server.

use serde::{Deserialize, Serialize};

/// Body of `POST /participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequestDto {
    pub name: String,
}

/// Entry of `GET /participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub name: String,
    pub last_seen: String, // ISO 8601
    pub joined_at: String, // ISO 8601
}

/// Body of `POST /messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequestDto {
    pub to: String,
    pub text: String,
    pub r#type: String,
}

/// Query of `GET /messages`
///
/// `limit` is kept raw; a value that is not an integer counts as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadMessagesQuery {
    pub limit: Option<String>,
}

/// Stamped message returned by `POST /messages` and `GET /messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub seq: u64,
    pub from: String,
    pub to: String,
    pub text: String,
    pub r#type: String,
    pub time: String, // ISO 8601
}
