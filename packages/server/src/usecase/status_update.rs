//! UseCase: ステータス更新処理
//!
//! 自由記述のステータス変更を member-status-update イベントとしてルーム
//! 全体にブロードキャストします。

use std::sync::Arc;

use mezame_shared::time::now_rfc3339;

use crate::domain::{GroupId, MessagePusher, PresenceRepository, UserId};
use crate::infrastructure::dto::websocket::{MemberStatusUpdateMessage, MessageType};

/// ステータス更新のユースケース
pub struct StatusUpdateUseCase {
    /// Repository（プレゼンス状態の抽象化）
    repository: Arc<dyn PresenceRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl StatusUpdateUseCase {
    /// 新しい StatusUpdateUseCase を作成
    pub fn new(
        repository: Arc<dyn PresenceRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ステータス更新を実行
    pub async fn execute(&self, user_id: UserId, group_id: GroupId, status: String) {
        let targets = self.repository.snapshot(&group_id).await;
        if targets.is_empty() {
            tracing::debug!(
                "user-status for empty group '{}', nothing to deliver",
                group_id
            );
            return;
        }

        let msg = MemberStatusUpdateMessage {
            r#type: MessageType::MemberStatusUpdate,
            user_id: user_id.to_string(),
            status,
            timestamp: now_rfc3339(),
        };
        let json = serde_json::to_string(&msg).unwrap();

        tracing::debug!(
            "Broadcasting status update from '{}' to group '{}'",
            user_id,
            group_id
        );
        self.message_pusher.broadcast(targets, &json).await;
    }
}
