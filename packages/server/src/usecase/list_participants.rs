//! UseCase: 参加者一覧の取得

use std::sync::Arc;

use crate::domain::{Participant, ParticipantRegistry};

use super::error::ListParticipantsError;

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    registry: Arc<ParticipantRegistry>,
}

impl ListParticipantsUseCase {
    /// 新しい ListParticipantsUseCase を作成
    pub fn new(registry: Arc<ParticipantRegistry>) -> Self {
        Self { registry }
    }

    /// 参加中の参加者を登録順で返す
    pub async fn execute(&self) -> Result<Vec<Participant>, ListParticipantsError> {
        Ok(self.registry.list_active().await?)
    }
}
