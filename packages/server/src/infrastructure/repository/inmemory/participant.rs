//! InMemory Participant Repository 実装
//!
//! ドメイン層が定義する ParticipantRepository trait の具体的な実装。
//! 登録順を保持するため Vec をインメモリ DB として使用します。
//! 参加者数は小さい前提のため、検索は線形探索です。

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    Participant, ParticipantName, ParticipantRepository, RepositoryError, Timestamp,
};

/// インメモリ Participant Repository 実装
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    /// 参加者（登録順）
    participants: RwLock<Vec<Participant>>,
}

impl InMemoryParticipantRepository {
    /// 空の InMemoryParticipantRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn find(&self, name: &ParticipantName) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.read().await;
        Ok(participants.iter().find(|p| &p.name == name).cloned())
    }

    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut participants = self.participants.write().await;
        participants.push(participant);
        Ok(())
    }

    async fn touch(
        &self,
        name: &ParticipantName,
        last_seen: Timestamp,
    ) -> Result<Option<Participant>, RepositoryError> {
        let mut participants = self.participants.write().await;
        Ok(participants
            .iter_mut()
            .find(|p| &p.name == name)
            .map(|p| {
                p.last_seen = last_seen;
                p.clone()
            }))
    }

    async fn remove(&self, name: &ParticipantName) -> Result<Option<Participant>, RepositoryError> {
        let mut participants = self.participants.write().await;
        Ok(participants
            .iter()
            .position(|p| &p.name == name)
            .map(|index| participants.remove(index)))
    }

    async fn list(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.read().await;
        Ok(participants.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryParticipantRepository の基本的な CRUD 操作
    // - 登録順が保持されること
    // - 存在しない参加者への操作が None を返すこと
    // ========================================

    fn participant(name: &str, at: i64) -> Participant {
        Participant::new(
            ParticipantName::new(name.to_string()).unwrap(),
            Timestamp::new(at),
        )
    }

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        // テスト項目: 追加した参加者を名前で検索できる
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();

        // when (操作):
        repo.insert(participant("ana", 1000)).await.unwrap();

        // then (期待する結果):
        assert_eq!(
            repo.find(&name("ana")).await.unwrap(),
            Some(participant("ana", 1000))
        );
        assert_eq!(repo.find(&name("bob")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        // テスト項目: list は登録順で返す
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();
        repo.insert(participant("carla", 1)).await.unwrap();
        repo.insert(participant("ana", 2)).await.unwrap();
        repo.insert(participant("bob", 3)).await.unwrap();

        // when (操作):
        repo.remove(&name("ana")).await.unwrap();
        let list = repo.list().await.unwrap();

        // then (期待する結果):
        let names: Vec<&str> = list.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["carla", "bob"]);
    }

    #[tokio::test]
    async fn test_touch_updates_last_seen_only() {
        // テスト項目: touch は last_seen のみ更新する
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();
        repo.insert(participant("ana", 1000)).await.unwrap();

        // when (操作):
        let touched = repo.touch(&name("ana"), Timestamp::new(5000)).await.unwrap();

        // then (期待する結果):
        let touched = touched.unwrap();
        assert_eq!(touched.last_seen, Timestamp::new(5000));
        assert_eq!(touched.joined_at, Timestamp::new(1000));
        assert_eq!(repo.find(&name("ana")).await.unwrap(), Some(touched));
    }

    #[tokio::test]
    async fn test_operations_on_missing_participant_return_none() {
        // テスト項目: 存在しない参加者への touch / remove は None を返す
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();

        // then (期待する結果):
        assert_eq!(
            repo.touch(&name("ghost"), Timestamp::new(1)).await.unwrap(),
            None
        );
        assert_eq!(repo.remove(&name("ghost")).await.unwrap(), None);
    }
}
