//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層（ParticipantRegistry / MessageLog）を操作します。

pub mod error;
pub mod heartbeat;
pub mod join_participant;
pub mod leave_participant;
pub mod list_participants;
pub mod read_messages;
pub mod send_message;
pub mod sweep_presence;

pub use error::{
    HeartbeatError, JoinError, LeaveError, ListParticipantsError, ReadMessagesError,
    SendMessageError,
};
pub use heartbeat::HeartbeatUseCase;
pub use join_participant::JoinParticipantUseCase;
pub use leave_participant::LeaveParticipantUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use read_messages::ReadMessagesUseCase;
pub use send_message::SendMessageUseCase;
pub use sweep_presence::{PresenceConfig, PresenceSweeper, SweepReport};
