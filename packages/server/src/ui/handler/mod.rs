//! HTTP handlers.

mod http;

pub use http::{
    heartbeat, health_check, join_participant, leave_participant, list_participants,
    read_messages, send_message,
};
