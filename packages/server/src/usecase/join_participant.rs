//! UseCase: 参加者の入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinParticipantUseCase::execute() メソッド
//! - 入室処理（重複チェック、入室通知の追記）
//!
//! ### なぜこのテストが必要か
//! - 同じ名前の参加者が同時に 2 人存在しないことを保証
//! - 入室通知がメッセージログに status として残ることを確認
//! - 通知の追記に失敗しても参加者の登録はロールバックされないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の入室
//! - 異常系：同じ名前での入室試行
//! - 異常系：入室通知の追記失敗

use std::sync::Arc;

use crate::domain::{
    MessageDraft, MessageLog, Participant, ParticipantName, ParticipantRegistry,
};

use super::error::JoinError;

/// 入室のユースケース
pub struct JoinParticipantUseCase {
    registry: Arc<ParticipantRegistry>,
    message_log: Arc<MessageLog>,
}

impl JoinParticipantUseCase {
    /// 新しい JoinParticipantUseCase を作成
    pub fn new(registry: Arc<ParticipantRegistry>, message_log: Arc<MessageLog>) -> Self {
        Self {
            registry,
            message_log,
        }
    }

    /// 入室を実行
    ///
    /// 1. Registry に登録（名前の一意性チェック）
    /// 2. 入室通知（status）をログに追記
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 登録された参加者
    /// * `Err(JoinError)` - 入室失敗。`NoticeFailed` の場合、参加者は登録済み
    pub async fn execute(&self, name: ParticipantName) -> Result<Participant, JoinError> {
        let participant = self.registry.join(name).await?;

        self.message_log
            .append(MessageDraft::join_notice(participant.name.clone()))
            .await
            .map_err(|source| JoinError::NoticeFailed {
                name: participant.name.to_string(),
                source,
            })?;

        tracing::info!("Participant '{}' joined", participant.name);
        Ok(participant)
    }
}
