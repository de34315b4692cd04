//! InMemory Repository 実装

pub mod message;
pub mod participant;

pub use message::InMemoryMessageRepository;
pub use participant::InMemoryParticipantRepository;
