//! MessagePusher trait 定義
//!
//! クライアントへのメッセージ送信（通知）のインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::value_object::UserId;

/// Channel used to push serialized messages toward one connection.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Errors from single-target message delivery.
#[derive(Debug, Error)]
pub enum MessagePushError {
    /// The target has no live connection. For directed sends this is an
    /// expected fire-and-forget miss, not a fault.
    #[error("user '{0}' is not connected")]
    UserNotFound(String),
    #[error("failed to push message: {0}")]
    PushFailed(String),
}

/// Message delivery boundary.
///
/// Delivery is fire-and-forget: pushing enqueues on an unbounded channel
/// and never blocks on the receiving transport, so one slow or dead client
/// cannot stall event processing for others.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続したユーザーの送信チャンネルを登録（既存のチャンネルは置き換え）
    async fn register_user(&self, user_id: UserId, sender: PusherChannel);

    /// 切断したユーザーの送信チャンネルを登録解除
    async fn unregister_user(&self, user_id: &UserId);

    /// 特定のユーザーにメッセージを送信（directed send）
    async fn push_to(&self, user_id: &UserId, content: &str) -> Result<(), MessagePushError>;

    /// 複数のユーザーにメッセージを送信（broadcast）
    ///
    /// A target without a live connection is skipped with a log entry;
    /// one unreachable recipient never aborts delivery to the rest.
    async fn broadcast(&self, targets: Vec<UserId>, content: &str);
}
