//! Core domain models for the chat server.

use serde::{Deserialize, Serialize};

use super::value_object::{MessageKind, MessageText, ParticipantName, Recipient, Timestamp};

/// Body of the notice appended when a participant joins
pub const JOIN_NOTICE_TEXT: &str = "entered the room";

/// Body of the notice appended when a participant leaves or is evicted
pub const LEAVE_NOTICE_TEXT: &str = "left the room";

/// Represents an active participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, unique among active participants
    pub name: ParticipantName,
    /// Last time the participant joined or sent a heartbeat
    pub last_seen: Timestamp,
    /// Time the participant joined
    pub joined_at: Timestamp,
}

impl Participant {
    /// Create a participant that has just joined at `now`
    pub fn new(name: ParticipantName, now: Timestamp) -> Self {
        Self {
            name,
            last_seen: now,
            joined_at: now,
        }
    }

    /// Whether `threshold_millis` or more have passed since `last_seen`
    pub fn is_stale(&self, now: Timestamp, threshold_millis: i64) -> bool {
        now.millis_since(self.last_seen) >= threshold_millis
    }
}

/// A message submitted for appending, before MessageLog stamps it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub from: ParticipantName,
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
}

impl MessageDraft {
    /// Create a new draft
    pub fn new(from: ParticipantName, to: Recipient, text: MessageText, kind: MessageKind) -> Self {
        Self {
            from,
            to,
            text,
            kind,
        }
    }

    /// Status notice announcing that `name` entered the room
    pub fn join_notice(name: ParticipantName) -> Self {
        Self::status(name, JOIN_NOTICE_TEXT)
    }

    /// Status notice announcing that `name` left the room
    pub fn leave_notice(name: ParticipantName) -> Self {
        Self::status(name, LEAVE_NOTICE_TEXT)
    }

    fn status(name: ParticipantName, text: &'static str) -> Self {
        Self::new(
            name,
            Recipient::broadcast(),
            MessageText::notice(text),
            MessageKind::Status,
        )
    }

    /// Stamp the draft with its position and time in the log
    pub fn stamp(self, seq: u64, time: Timestamp) -> Message {
        Message {
            seq,
            from: self.from,
            to: self.to,
            text: self.text,
            kind: self.kind,
            time,
        }
    }
}

/// Represents a stamped entry of the message log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Position in the log, starting at 0
    pub seq: u64,
    /// Author name
    pub from: ParticipantName,
    pub to: Recipient,
    pub text: MessageText,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Time assigned by the log on append
    pub time: Timestamp,
}
