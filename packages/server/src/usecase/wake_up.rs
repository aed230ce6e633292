//! UseCase: 起床通知処理
//!
//! 「起きた」と申告したユーザーの member-woke-up イベントをルーム全体に
//! ブロードキャストします。送信者自身も配信対象に含みます（同一ユーザー
//! の全デバイスが同じ確定イベントを観測するため、送信者は除外しません）。

use std::sync::Arc;

use mezame_shared::time::now_rfc3339;

use crate::domain::{GroupId, MessagePusher, PresenceRepository, UserId};
use crate::infrastructure::dto::websocket::{MemberWokeUpMessage, MessageType};

/// 起床通知のユースケース
pub struct WakeUpUseCase {
    /// Repository（プレゼンス状態の抽象化）
    repository: Arc<dyn PresenceRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl WakeUpUseCase {
    /// 新しい WakeUpUseCase を作成
    pub fn new(
        repository: Arc<dyn PresenceRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 起床通知を実行
    ///
    /// # Arguments
    ///
    /// * `user_id` - 起床を申告したユーザー
    /// * `group_id` - 配信先のルーム
    /// * `user_name` - 表示名（ペイロードにそのまま載せる）
    /// * `wake_up_time` - クライアントが申告した起床時刻（ISO 8601）
    pub async fn execute(
        &self,
        user_id: UserId,
        group_id: GroupId,
        user_name: String,
        wake_up_time: String,
    ) {
        let targets = self.repository.snapshot(&group_id).await;
        if targets.is_empty() {
            tracing::debug!("wake-up for empty group '{}', nothing to deliver", group_id);
            return;
        }

        let msg = MemberWokeUpMessage {
            r#type: MessageType::MemberWokeUp,
            user_id: user_id.to_string(),
            user_name,
            wake_up_time,
            timestamp: now_rfc3339(),
        };
        let json = serde_json::to_string(&msg).unwrap();

        tracing::info!(
            "User '{}' woke up; notifying {} members of '{}'",
            user_id,
            targets.len(),
            group_id
        );
        self.message_pusher.broadcast(targets, &json).await;
    }
}
