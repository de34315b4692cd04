//! Domain layer for the chat server.
//!
//! This module contains the presence and message-visibility rules,
//! independent of HTTP DTOs and storage mechanics.

pub mod entity;
pub mod error;
pub mod message_log;
pub mod registry;
pub mod repository;
pub mod value_object;
pub mod visibility;

pub use entity::{Message, MessageDraft, Participant};
pub use error::{
    MessageLogError, RegistryJoinError, RegistryLookupError, RepositoryError, ValueObjectError,
};
pub use message_log::MessageLog;
pub use registry::ParticipantRegistry;
pub use repository::{MessageRepository, ParticipantRepository};
pub use value_object::{
    BROADCAST_TARGET, MessageKind, MessageText, ParticipantName, Recipient, Timestamp,
};
pub use visibility::{is_visible, recent_visible_messages};
