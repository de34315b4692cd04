//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 永続化される状態は 2 つの論理コレクションのみです：
//!
//! - participants（name をキーとする）
//! - messages（seq をキーとする追記専用ログ）

use async_trait::async_trait;

use super::{Message, Participant, ParticipantName, RepositoryError, Timestamp};

/// Participant Repository trait
///
/// 参加者コレクションへのインターフェース。
/// 一意性チェックや排他制御は ParticipantRegistry が担当し、
/// この trait は単純な読み書きのみを提供します。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// 名前で参加者を検索
    async fn find(&self, name: &ParticipantName) -> Result<Option<Participant>, RepositoryError>;

    /// 参加者を末尾に追加（登録順を保持する）
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// last_seen を更新し、更新後の参加者を返す（存在しなければ None）
    async fn touch(
        &self,
        name: &ParticipantName,
        last_seen: Timestamp,
    ) -> Result<Option<Participant>, RepositoryError>;

    /// 参加者を削除し、削除した参加者を返す（存在しなければ None）
    async fn remove(&self, name: &ParticipantName) -> Result<Option<Participant>, RepositoryError>;

    /// 全参加者を登録順で取得
    async fn list(&self) -> Result<Vec<Participant>, RepositoryError>;
}

/// Message Repository trait
///
/// 追記専用のメッセージコレクションへのインターフェース。
/// 更新・削除の操作は意図的に存在しません。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// スタンプ済みメッセージを末尾に追加（1 件単位でアトミック）
    async fn append(&self, message: Message) -> Result<(), RepositoryError>;

    /// 全メッセージを追記順で取得（呼び出し時点のスナップショット）
    async fn all(&self) -> Result<Vec<Message>, RepositoryError>;
}
