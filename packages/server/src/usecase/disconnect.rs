//! UseCase: 切断処理
//!
//! トランスポート層からの切断通知を受けて registry / index をクリーン
//! アップし、所属していたルームにメンバーシップ更新をブロードキャスト
//! します。再接続で置き換え済みの接続（stale connection）の切断は
//! no-op で、後継接続の pusher チャンネルには触れません。

use std::sync::Arc;

use crate::domain::{ConnectionId, DisconnectOutcome, MessagePusher, PresenceRepository};

use super::broadcast_group_members;

/// 切断のユースケース
pub struct DisconnectUseCase {
    /// Repository（プレゼンス状態の抽象化）
    repository: Arc<dyn PresenceRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectUseCase {
    /// 新しい DisconnectUseCase を作成
    pub fn new(
        repository: Arc<dyn PresenceRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 切断を実行
    ///
    /// Disconnect is the only cancellation signal and must be idempotent:
    /// running it for an already-cleaned-up connection changes nothing.
    pub async fn execute(&self, connection_id: ConnectionId) {
        match self.repository.disconnect(&connection_id).await {
            DisconnectOutcome::Removed { user_id, group_id } => {
                self.message_pusher.unregister_user(&user_id).await;
                tracing::info!("User '{}' disconnected ('{}')", user_id, connection_id);

                if let Some(group_id) = group_id {
                    broadcast_group_members(&*self.repository, &*self.message_pusher, &group_id)
                        .await;
                }
            }
            DisconnectOutcome::StaleConnection => {
                tracing::debug!("Disconnect for stale connection '{}', ignoring", connection_id);
            }
        }
    }
}
