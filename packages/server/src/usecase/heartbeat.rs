//! UseCase: heartbeat（生存通知）処理

use std::sync::Arc;

use crate::domain::{Participant, ParticipantName, ParticipantRegistry};

use super::error::HeartbeatError;

/// heartbeat のユースケース
pub struct HeartbeatUseCase {
    registry: Arc<ParticipantRegistry>,
}

impl HeartbeatUseCase {
    /// 新しい HeartbeatUseCase を作成
    pub fn new(registry: Arc<ParticipantRegistry>) -> Self {
        Self { registry }
    }

    /// 参加者の last_seen を更新する
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 更新後の参加者
    /// * `Err(HeartbeatError::NotRegistered)` - 参加中ではない
    pub async fn execute(&self, name: &ParticipantName) -> Result<Participant, HeartbeatError> {
        Ok(self.registry.heartbeat(name).await?)
    }
}
