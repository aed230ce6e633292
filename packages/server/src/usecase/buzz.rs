//! UseCase: 起こしリクエスト（buzz）処理
//!
//! 特定のユーザーだけに get-buzzed イベントを送信します。ブロードキャスト
//! ではなく directed send で、対象がオフラインなら黙って破棄します
//! （fire-and-forget: 送信側に配達確認はありません）。

use std::sync::Arc;

use crate::domain::{GroupId, MessagePushError, MessagePusher, UserId};
use crate::infrastructure::dto::websocket::{GetBuzzedMessage, MessageType};

/// 起こしリクエストのユースケース
pub struct BuzzUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl BuzzUseCase {
    /// 新しい BuzzUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 起こしリクエストを実行
    ///
    /// # Arguments
    ///
    /// * `from_user_id` - リクエストしたユーザー
    /// * `from_user_name` - リクエストしたユーザーの表示名
    /// * `group_id` - リクエスト元のルーム（ペイロードにそのまま載せる）
    /// * `target_user_id` - 起こされるユーザー
    pub async fn execute(
        &self,
        from_user_id: UserId,
        from_user_name: String,
        group_id: GroupId,
        target_user_id: UserId,
    ) {
        let msg = GetBuzzedMessage {
            r#type: MessageType::GetBuzzed,
            from_user_id: from_user_id.to_string(),
            from_user_name,
            group_id: group_id.to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();

        match self.message_pusher.push_to(&target_user_id, &json).await {
            Ok(()) => {
                tracing::info!("User '{}' buzzed '{}'", from_user_id, target_user_id);
            }
            Err(MessagePushError::UserNotFound(_)) => {
                // 対象オフラインは想定内
                tracing::debug!("Buzz target '{}' is offline, dropping", target_user_id);
            }
            Err(e) => {
                tracing::warn!("Failed to deliver buzz to '{}': {}", target_user_id, e);
            }
        }
    }
}
