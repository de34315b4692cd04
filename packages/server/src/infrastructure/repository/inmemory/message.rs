//! InMemory Message Repository 実装
//!
//! ドメイン層が定義する MessageRepository trait の具体的な実装。
//! 容量を指定した場合、上限に達すると追記は `CapacityExceeded` で失敗します。

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Message, MessageRepository, RepositoryError};

/// インメモリ Message Repository 実装
#[derive(Default)]
pub struct InMemoryMessageRepository {
    /// メッセージ（追記順）
    messages: RwLock<Vec<Message>>,
    /// 最大件数（None は無制限）
    capacity: Option<usize>,
}

impl InMemoryMessageRepository {
    /// 容量無制限の InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 最大 `capacity` 件まで保持する InMemoryMessageRepository を作成
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
            capacity: Some(capacity),
        }
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, message: Message) -> Result<(), RepositoryError> {
        let mut messages = self.messages.write().await;
        if let Some(capacity) = self.capacity
            && messages.len() >= capacity
        {
            return Err(RepositoryError::CapacityExceeded { capacity });
        }
        messages.push(message);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.messages.read().await;
        Ok(messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageDraft, ParticipantName, Timestamp};

    fn notice(seq: u64) -> Message {
        MessageDraft::join_notice(ParticipantName::new(format!("user{seq}")).unwrap())
            .stamp(seq, Timestamp::new(seq as i64))
    }

    #[tokio::test]
    async fn test_append_and_all() {
        // テスト項目: 追記したメッセージを追記順で取得できる
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();

        // when (操作):
        for seq in 0..3 {
            repo.append(notice(seq)).await.unwrap();
        }

        // then (期待する結果):
        let all = repo.all().await.unwrap();
        assert_eq!(all, vec![notice(0), notice(1), notice(2)]);
    }

    #[tokio::test]
    async fn test_capacity_exceeded() {
        // テスト項目: 容量超過時はエラーとなり、既存のメッセージは保持される
        // given (前提条件):
        let repo = InMemoryMessageRepository::with_capacity(2);
        repo.append(notice(0)).await.unwrap();
        repo.append(notice(1)).await.unwrap();

        // when (操作):
        let result = repo.append(notice(2)).await;

        // then (期待する結果):
        assert_eq!(result, Err(RepositoryError::CapacityExceeded { capacity: 2 }));
        assert_eq!(repo.all().await.unwrap().len(), 2);
    }
}
