//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ParticipantName validation error
    #[error("ParticipantName cannot be empty")]
    ParticipantNameEmpty,

    /// ParticipantName too long error
    #[error("ParticipantName cannot exceed {max} characters (got {actual})")]
    ParticipantNameTooLong { max: usize, actual: usize },

    /// Recipient validation error
    #[error("Recipient cannot be empty")]
    RecipientEmpty,

    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,

    /// MessageText too long error
    #[error("MessageText cannot exceed {max} characters (got {actual})")]
    MessageTextTooLong { max: usize, actual: usize },

    /// MessageKind is not one a participant may send
    #[error("Message type '{0}' cannot be sent by a participant")]
    MessageKindNotSendable(String),
}

/// Errors raised by the storage collaborator behind a repository trait
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached or refused the operation
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The backing store is full
    #[error("Storage capacity exceeded: maximum {capacity} records allowed")]
    CapacityExceeded { capacity: usize },
}

/// Errors of `ParticipantRegistry::join`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryJoinError {
    /// An active participant already uses this name
    #[error("Participant '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Errors of registry operations on an existing participant (heartbeat, leave)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryLookupError {
    /// No active participant uses this name
    #[error("Participant '{0}' is not registered")]
    NotRegistered(String),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Errors related to MessageLog operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageLogError {
    /// The message could not be stored; earlier entries are untouched
    #[error("Failed to append message: {0}")]
    AppendFailed(#[source] RepositoryError),

    /// The log could not be read
    #[error("Message log unavailable: {0}")]
    StorageUnavailable(#[source] RepositoryError),
}
