//! Data Transfer Objects (DTOs) for the chat server.
//!
//! - `http`: HTTP API request/response DTOs
//! - `conversion`: mapping between DTOs and domain models

pub mod conversion;
pub mod http;
