//! UseCase: 無応答の参加者の掃除（PresenceSweeper）
//!
//! 退室通知は削除が確定して Registry のロックを解放した後に追記される。
//! 掃除と同時に同じ名前で再入室した場合、通知の順序は入れ替わり得る。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PresenceSweeper::sweep_once() メソッド
//! - しきい値を超えて無応答の参加者の削除と、退室通知の追記
//!
//! ### なぜこのテストが必要か
//! - 退室通知が削除 1 件につきちょうど 1 回追記されることを保証
//! - 通知の追記に失敗しても削除は取り消されないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：しきい値ちょうど／未満の境界
//! - 異常系：退室通知の追記失敗
//! - 定期実行：spawn したタスクが時間経過で掃除を行う

use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::MissedTickBehavior};

use crate::domain::{MessageDraft, MessageLog, ParticipantName, ParticipantRegistry};

/// Default silence allowed before a participant is evicted
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(10);

/// Default period between sweeps
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(15);

/// Presence sweep settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceConfig {
    /// Silence after which a participant is considered gone
    pub stale_after: Duration,
    /// Period between sweeps
    pub sweep_interval: Duration,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            stale_after: DEFAULT_STALE_AFTER,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

/// Outcome of a single sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Participants removed, in registration order
    pub evicted: Vec<ParticipantName>,
    /// Departure notices that could not be appended
    pub failed_notices: usize,
}

/// 無応答の参加者を定期的に削除するバックグラウンド処理
pub struct PresenceSweeper {
    registry: Arc<ParticipantRegistry>,
    message_log: Arc<MessageLog>,
    config: PresenceConfig,
}

impl PresenceSweeper {
    /// 新しい PresenceSweeper を作成
    pub fn new(
        registry: Arc<ParticipantRegistry>,
        message_log: Arc<MessageLog>,
        config: PresenceConfig,
    ) -> Self {
        Self {
            registry,
            message_log,
            config,
        }
    }

    /// 1 回分の掃除を実行
    ///
    /// 削除は best-effort で、退室通知の追記に失敗しても取り消さず、
    /// 再試行もしません（ログに記録するのみ）。
    pub async fn sweep_once(&self) -> SweepReport {
        let now = self.registry.now();
        let evicted = match self
            .registry
            .evict_stale(now, self.config.stale_after)
            .await
        {
            Ok(evicted) => evicted,
            Err(e) => {
                tracing::warn!("Presence sweep skipped: {}", e);
                return SweepReport::default();
            }
        };

        let mut failed_notices = 0;
        for name in &evicted {
            tracing::info!("Participant '{}' timed out", name);
            if let Err(e) = self
                .message_log
                .append(MessageDraft::leave_notice(name.clone()))
                .await
            {
                failed_notices += 1;
                tracing::warn!("Failed to record departure of '{}': {}", name, e);
            }
        }

        if !evicted.is_empty() {
            tracing::debug!(
                evicted = evicted.len(),
                failed_notices,
                "Presence sweep completed"
            );
        }

        SweepReport {
            evicted,
            failed_notices,
        }
    }

    /// 一定間隔で sweep_once を実行するタスクを起動
    ///
    /// 返された `JoinHandle` を abort するとタスクは停止します。
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.config.sweep_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // 最初の tick は即座に完了するため読み捨てる
            interval.tick().await;

            tracing::info!(
                "Presence sweeper started (interval: {:?}, stale after: {:?})",
                self.config.sweep_interval,
                self.config.stale_after
            );

            loop {
                interval.tick().await;
                self.sweep_once().await;
            }
        })
    }
}
