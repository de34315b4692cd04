//! UseCase: 参加者の退室処理
//!
//! 退室通知は Registry のロック解放後に追記される。その間に同じ名前で
//! 再入室が完了すると、ログ上で入室通知が退室通知より先に並ぶことがある。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveParticipantUseCase::execute() メソッド
//! - 退室処理（参加者削除、退室通知の追記）
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の退室と通知
//! - 異常系：参加していない名前での退室試行
//! - 異常系：退室通知の追記失敗（削除はロールバックされない）

use std::sync::Arc;

use crate::domain::{
    MessageDraft, MessageLog, Participant, ParticipantName, ParticipantRegistry,
};

use super::error::LeaveError;

/// 退室のユースケース
pub struct LeaveParticipantUseCase {
    registry: Arc<ParticipantRegistry>,
    message_log: Arc<MessageLog>,
}

impl LeaveParticipantUseCase {
    /// 新しい LeaveParticipantUseCase を作成
    pub fn new(registry: Arc<ParticipantRegistry>, message_log: Arc<MessageLog>) -> Self {
        Self {
            registry,
            message_log,
        }
    }

    /// 退室を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 削除された参加者
    /// * `Err(LeaveError)` - 退室失敗。`NoticeFailed` の場合、参加者は削除済み
    pub async fn execute(&self, name: &ParticipantName) -> Result<Participant, LeaveError> {
        let participant = self.registry.leave(name).await?;

        self.message_log
            .append(MessageDraft::leave_notice(participant.name.clone()))
            .await
            .map_err(|source| LeaveError::NoticeFailed {
                name: participant.name.to_string(),
                source,
            })?;

        tracing::info!("Participant '{}' left", participant.name);
        Ok(participant)
    }
}
