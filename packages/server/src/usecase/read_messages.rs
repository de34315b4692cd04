//! UseCase: メッセージ取得処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ReadMessagesUseCase::execute() メソッド
//! - 閲覧者ごとの可視性フィルタと件数制限の組み合わせ
//!
//! ### どのような状況を想定しているか
//! - ブロードキャストは全員に見える
//! - プライベートメッセージは当事者以外に見えない
//! - limit は可視メッセージに対して適用される

use std::sync::Arc;

use crate::domain::{Message, MessageLog, recent_visible_messages};

use super::error::ReadMessagesError;

/// メッセージ取得のユースケース
pub struct ReadMessagesUseCase {
    message_log: Arc<MessageLog>,
}

impl ReadMessagesUseCase {
    /// 新しい ReadMessagesUseCase を作成
    pub fn new(message_log: Arc<MessageLog>) -> Self {
        Self { message_log }
    }

    /// `viewer` に見える直近 `limit` 件のメッセージを古い順で返す
    ///
    /// `viewer` は未登録の名前でもよい（その場合は公開メッセージのみ）。
    pub async fn execute(
        &self,
        viewer: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Message>, ReadMessagesError> {
        let messages = self.message_log.all_messages().await?;
        Ok(recent_visible_messages(messages, viewer, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            MessageDraft, MessageKind, MessageText, ParticipantName, ParticipantRegistry,
            Recipient,
        },
        infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
        usecase::{JoinParticipantUseCase, SendMessageUseCase},
    };
    use lobby_shared::time::ManualClock;

    fn draft(from: &str, to: &str, text: &str, kind: MessageKind) -> MessageDraft {
        MessageDraft::new(
            ParticipantName::new(from.to_string()).unwrap(),
            Recipient::new(to.to_string()).unwrap(),
            MessageText::new(text.to_string()).unwrap(),
            kind,
        )
    }

    fn create_log() -> Arc<MessageLog> {
        Arc::new(MessageLog::new(
            Arc::new(InMemoryMessageRepository::new()),
            Arc::new(ManualClock::new(0)),
        ))
    }

    fn texts(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.text.as_str()).collect()
    }

    #[tokio::test]
    async fn test_scenario_join_conflict_broadcast_and_private() {
        // テスト項目: 入室・重複入室・ブロードキャスト・プライベートの一連のシナリオ
        // given (前提条件):
        let clock = Arc::new(ManualClock::new(0));
        let registry = Arc::new(ParticipantRegistry::new(
            Arc::new(InMemoryParticipantRepository::new()),
            clock.clone(),
        ));
        let message_log = Arc::new(MessageLog::new(
            Arc::new(InMemoryMessageRepository::new()),
            clock,
        ));
        let join = JoinParticipantUseCase::new(registry.clone(), message_log.clone());
        let send = SendMessageUseCase::new(registry, message_log.clone());
        let read = ReadMessagesUseCase::new(message_log);
        let ana = ParticipantName::new("ana".to_string()).unwrap();

        // when (操作):
        assert!(join.execute(ana.clone()).await.is_ok());
        assert!(join.execute(ana.clone()).await.is_err());
        send.execute(
            ana.clone(),
            Recipient::broadcast(),
            MessageText::new("hi".to_string()).unwrap(),
            MessageKind::Message,
        )
        .await
        .unwrap();
        send.execute(
            ana,
            Recipient::new("bob".to_string()).unwrap(),
            MessageText::new("secret".to_string()).unwrap(),
            MessageKind::PrivateMessage,
        )
        .await
        .unwrap();

        // then (期待する結果):
        let bob = read.execute("bob", None).await.unwrap();
        assert_eq!(texts(&bob), vec!["entered the room", "hi", "secret"]);
        let carla = read.execute("carla", None).await.unwrap();
        assert_eq!(texts(&carla), vec!["entered the room", "hi"]);
    }

    #[tokio::test]
    async fn test_limit_applies_to_visible_messages() {
        // テスト項目: limit は生のログではなく可視メッセージの末尾に適用される
        // given (前提条件): m1 ブロードキャスト, m2 ana→bob, m3 ブロードキャスト
        let message_log = create_log();
        message_log
            .append(draft("ana", "Todos", "m1", MessageKind::Message))
            .await
            .unwrap();
        message_log
            .append(draft("ana", "bob", "m2", MessageKind::PrivateMessage))
            .await
            .unwrap();
        message_log
            .append(draft("ana", "Todos", "m3", MessageKind::Message))
            .await
            .unwrap();
        let usecase = ReadMessagesUseCase::new(message_log);

        // when (操作):
        let carla = usecase.execute("carla", Some(1)).await.unwrap();
        let carla_two = usecase.execute("carla", Some(2)).await.unwrap();
        let bob = usecase.execute("bob", Some(2)).await.unwrap();
        let everything = usecase.execute("bob", Some(50)).await.unwrap();

        // then (期待する結果):
        assert_eq!(texts(&carla), vec!["m3"]);
        assert_eq!(texts(&carla_two), vec!["m1", "m3"]);
        assert_eq!(texts(&bob), vec!["m2", "m3"]);
        assert_eq!(texts(&everything), vec!["m1", "m2", "m3"]);
    }
}
