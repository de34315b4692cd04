//! MessageLog: append-only ordered store of chat events.
//!
//! Appends are serialized by a mutex that also carries the next sequence
//! number and the last stamped time, so `seq` is gap-free and `time` never
//! decreases with append order.

use std::sync::Arc;

use lobby_shared::time::Clock;
use tokio::sync::Mutex;

use super::{Message, MessageDraft, MessageLogError, MessageRepository, Timestamp};

#[derive(Debug)]
struct AppendCursor {
    next_seq: u64,
    last_time: Option<Timestamp>,
}

/// Append-only chat log
pub struct MessageLog {
    repository: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
    cursor: Mutex<AppendCursor>,
}

impl MessageLog {
    /// Create a log over an empty repository
    pub fn new(repository: Arc<dyn MessageRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            cursor: Mutex::new(AppendCursor {
                next_seq: 0,
                last_time: None,
            }),
        }
    }

    /// Create a log that continues after the entries already in `repository`
    pub async fn resume(
        repository: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, MessageLogError> {
        let existing = repository
            .all()
            .await
            .map_err(MessageLogError::StorageUnavailable)?;
        let cursor = AppendCursor {
            next_seq: existing.last().map_or(0, |m| m.seq + 1),
            last_time: existing.last().map(|m| m.time),
        };
        Ok(Self {
            repository,
            clock,
            cursor: Mutex::new(cursor),
        })
    }

    /// Stamp and store a message, returning the stamped copy.
    ///
    /// # Errors
    ///
    /// Returns `MessageLogError::AppendFailed` if storage rejects the write.
    /// Earlier entries are untouched and the sequence number is not consumed.
    pub async fn append(&self, draft: MessageDraft) -> Result<Message, MessageLogError> {
        let mut cursor = self.cursor.lock().await;

        let now = Timestamp::new(self.clock.now_millis());
        let time = cursor.last_time.map_or(now, |last| now.max(last));
        let message = draft.stamp(cursor.next_seq, time);

        self.repository
            .append(message.clone())
            .await
            .map_err(MessageLogError::AppendFailed)?;

        cursor.next_seq += 1;
        cursor.last_time = Some(time);
        Ok(message)
    }

    /// Snapshot of the whole log, oldest first.
    ///
    /// Every call returns a fresh, independent snapshot.
    pub async fn all_messages(&self) -> Result<Vec<Message>, MessageLogError> {
        self.repository
            .all()
            .await
            .map_err(MessageLogError::StorageUnavailable)
    }
}
