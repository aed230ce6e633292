//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続中ユーザーの `UnboundedSender` を管理
//! - ユーザーへのメッセージ送信（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`src/ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に
//! 使用します。送信はチャンネルへの enqueue のみで、トランスポートの
//! 状態を待つことはありません（fire-and-forget）。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{MessagePushError, MessagePusher, PusherChannel, UserId};

/// WebSocket を使った MessagePusher 実装
///
/// The map is keyed by logical user id: one live channel per user. A
/// reconnecting user's `register_user` replaces the superseded channel.
#[derive(Default)]
pub struct WebSocketMessagePusher {
    users: Mutex<HashMap<UserId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_user(&self, user_id: UserId, sender: PusherChannel) {
        let mut users = self.users.lock().await;
        if users.insert(user_id.clone(), sender).is_some() {
            tracing::debug!("Replaced pusher channel for user '{}'", user_id);
        } else {
            tracing::debug!("User '{}' registered to MessagePusher", user_id);
        }
    }

    async fn unregister_user(&self, user_id: &UserId) {
        let mut users = self.users.lock().await;
        users.remove(user_id);
        tracing::debug!("User '{}' unregistered from MessagePusher", user_id);
    }

    async fn push_to(&self, user_id: &UserId, content: &str) -> Result<(), MessagePushError> {
        let users = self.users.lock().await;

        if let Some(sender) = users.get(user_id) {
            sender
                .send(content.to_string())
                .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed message to user '{}'", user_id);
            Ok(())
        } else {
            Err(MessagePushError::UserNotFound(user_id.to_string()))
        }
    }

    async fn broadcast(&self, targets: Vec<UserId>, content: &str) {
        let users = self.users.lock().await;

        for target in targets {
            if let Some(sender) = users.get(&target) {
                // ブロードキャストでは一部の送信失敗を許容
                if let Err(e) = sender.send(content.to_string()) {
                    tracing::warn!("Failed to push message to user '{}': {}", target, e);
                } else {
                    tracing::debug!("Broadcasted message to user '{}'", target);
                }
            } else {
                // 期待されるレース: index にはいるが接続が既に閉じている
                tracing::warn!("User '{}' not found during broadcast, skipping", target);
            }
        }
    }
}
