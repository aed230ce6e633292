//! UseCase: ルーム離脱処理
//!
//! ユーザーをルームから外し、そのルームにメンバーシップ更新を
//! ブロードキャストします。重複・期限切れの leave 要求は状態を変えない
//! no-op ですが、更新のブロードキャスト自体は（冗長でも）行います。

use std::sync::Arc;

use crate::domain::{GroupId, LeaveOutcome, MessagePusher, PresenceRepository, UserId};

use super::broadcast_group_members;

/// ルーム離脱のユースケース
pub struct LeaveGroupUseCase {
    /// Repository（プレゼンス状態の抽象化）
    repository: Arc<dyn PresenceRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl LeaveGroupUseCase {
    /// 新しい LeaveGroupUseCase を作成
    pub fn new(
        repository: Arc<dyn PresenceRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム離脱を実行
    pub async fn execute(&self, user_id: UserId, group_id: GroupId) {
        match self.repository.leave_group(&user_id, &group_id).await {
            LeaveOutcome::Left => {
                tracing::info!("User '{}' left group '{}'", user_id, group_id);
            }
            LeaveOutcome::NotAMember => {
                tracing::warn!(
                    "leave-group for user '{}' not in group '{}', ignoring",
                    user_id,
                    group_id
                );
            }
        }

        // 冗長な leave でも現在のスナップショットを再配信する
        broadcast_group_members(&*self.repository, &*self.message_pusher, &group_id).await;
    }
}
