//! UseCase: 接続受付処理
//!
//! 新しいトランスポート接続を registry と pusher に登録します。同じ
//! ユーザーの既存接続は「last writer wins」でその場で破棄され、破棄した
//! 側のルームにはメンバーシップ更新が再ブロードキャストされます。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PresenceRepository, PusherChannel, UserId};

use super::broadcast_group_members;

/// 接続受付のユースケース
pub struct ConnectUseCase {
    /// Repository（プレゼンス状態の抽象化）
    repository: Arc<dyn PresenceRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectUseCase {
    /// 新しい ConnectUseCase を作成
    pub fn new(
        repository: Arc<dyn PresenceRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 接続受付を実行
    ///
    /// Registration has no error condition: a duplicate `user_id` is
    /// connection replacement, not a conflict.
    ///
    /// # Arguments
    ///
    /// * `connection_id` - サーバーが生成した接続 ID
    /// * `user_id` - 接続したユーザーの ID（呼び出し元が提示、未検証）
    /// * `sender` - ユーザーへのメッセージ送信用チャンネル
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        user_id: UserId,
        sender: PusherChannel,
    ) {
        let evicted = self
            .repository
            .register(connection_id, user_id.clone())
            .await;

        // Register (or replace) the pusher channel before any broadcast so
        // the new connection observes every update from here on.
        self.message_pusher
            .register_user(user_id.clone(), sender)
            .await;

        if let Some(eviction) = evicted {
            tracing::info!(
                "User '{}' reconnected; superseded connection '{}'",
                user_id,
                eviction.connection_id
            );
            if let Some(group_id) = eviction.group_id {
                broadcast_group_members(&*self.repository, &*self.message_pusher, &group_id).await;
            }
        } else {
            tracing::info!("User '{}' connected as '{}'", user_id, connection_id);
        }
    }
}
