//! Server state shared by the HTTP handlers.

use std::sync::Arc;

use crate::usecase::{
    HeartbeatUseCase, JoinParticipantUseCase, LeaveParticipantUseCase, ListParticipantsUseCase,
    ReadMessagesUseCase, SendMessageUseCase,
};

/// Shared application state
pub struct AppState {
    /// JoinParticipantUseCase（参加のユースケース）
    pub join_participant_usecase: Arc<JoinParticipantUseCase>,
    /// ListParticipantsUseCase（参加者一覧取得のユースケース）
    pub list_participants_usecase: Arc<ListParticipantsUseCase>,
    /// HeartbeatUseCase（在室通知のユースケース）
    pub heartbeat_usecase: Arc<HeartbeatUseCase>,
    /// LeaveParticipantUseCase（退室のユースケース）
    pub leave_participant_usecase: Arc<LeaveParticipantUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// ReadMessagesUseCase（メッセージ取得のユースケース）
    pub read_messages_usecase: Arc<ReadMessagesUseCase>,
}
