//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{
    MessageLogError, RegistryJoinError, RegistryLookupError, RepositoryError, ValueObjectError,
};

/// 参加処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// 同じ名前の参加者が既に存在する
    #[error("Participant '{0}' is already registered")]
    AlreadyRegistered(String),

    /// 参加者は登録されたが、入室通知を追記できなかった
    #[error("Participant '{name}' joined but the join notice was not recorded: {source}")]
    NoticeFailed {
        name: String,
        #[source]
        source: MessageLogError,
    },

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl From<RegistryJoinError> for JoinError {
    fn from(error: RegistryJoinError) -> Self {
        match error {
            RegistryJoinError::AlreadyRegistered(name) => Self::AlreadyRegistered(name),
            RegistryJoinError::Storage(e) => Self::Storage(e),
        }
    }
}

/// 参加者一覧取得のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListParticipantsError {
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// heartbeat のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeartbeatError {
    #[error("Participant '{0}' is not registered")]
    NotRegistered(String),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl From<RegistryLookupError> for HeartbeatError {
    fn from(error: RegistryLookupError) -> Self {
        match error {
            RegistryLookupError::NotRegistered(name) => Self::NotRegistered(name),
            RegistryLookupError::Storage(e) => Self::Storage(e),
        }
    }
}

/// 退室処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeaveError {
    #[error("Participant '{0}' is not registered")]
    NotRegistered(String),

    /// 参加者は削除されたが、退室通知を追記できなかった
    #[error("Participant '{name}' left but the leave notice was not recorded: {source}")]
    NoticeFailed {
        name: String,
        #[source]
        source: MessageLogError,
    },

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl From<RegistryLookupError> for LeaveError {
    fn from(error: RegistryLookupError) -> Self {
        match error {
            RegistryLookupError::NotRegistered(name) => Self::NotRegistered(name),
            RegistryLookupError::Storage(e) => Self::Storage(e),
        }
    }
}

/// メッセージ送信のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// 入力値が不正（宛先・本文・種別）
    #[error("Invalid message: {0}")]
    Invalid(#[from] ValueObjectError),

    /// 送信者が参加中ではない
    #[error("Sender '{0}' is not an active participant")]
    SenderNotActive(String),

    #[error(transparent)]
    Log(#[from] MessageLogError),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// メッセージ取得のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadMessagesError {
    #[error(transparent)]
    Log(#[from] MessageLogError),
}
