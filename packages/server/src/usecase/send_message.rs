//! UseCase: メッセージ送信処理
//!
//! 送信者の参加確認と追記は別のクリティカルセクションで行う。確認の直後に
//! 削除された送信者のメッセージは、そのまま追記される。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信者の参加確認、メッセージログへの追記
//!
//! ### なぜこのテストが必要か
//! - 参加していない名前でメッセージを送れないことを保証
//! - status 種別は参加者から送信できないことを保証
//! - time はログが付与し、呼び出し側の値を使わないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ブロードキャスト・プライベートメッセージの送信
//! - 異常系：未参加の送信者、送信不可の種別、ログ追記失敗

use std::sync::Arc;

use crate::domain::{
    Message, MessageDraft, MessageKind, MessageLog, MessageText, ParticipantName,
    ParticipantRegistry, Recipient, ValueObjectError,
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    registry: Arc<ParticipantRegistry>,
    message_log: Arc<MessageLog>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(registry: Arc<ParticipantRegistry>, message_log: Arc<MessageLog>) -> Self {
        Self {
            registry,
            message_log,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信者（参加中である必要がある）
    /// * `to` - 宛先（"Todos" または参加者名）
    /// * `text` - 本文
    /// * `kind` - `Message` または `PrivateMessage`
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - ログが time と seq を付与したメッセージ
    /// * `Err(SendMessageError)` - 送信失敗
    pub async fn execute(
        &self,
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
    ) -> Result<Message, SendMessageError> {
        if !matches!(kind, MessageKind::Message | MessageKind::PrivateMessage) {
            return Err(ValueObjectError::MessageKindNotSendable(kind.to_string()).into());
        }

        if !self.registry.is_active(&from).await? {
            return Err(SendMessageError::SenderNotActive(from.into_string()));
        }

        let message = self
            .message_log
            .append(MessageDraft::new(from, to, text, kind))
            .await?;

        tracing::debug!(
            "Message #{} appended: {} -> {} ({})",
            message.seq,
            message.from,
            message.to,
            message.kind
        );
        Ok(message)
    }
}
