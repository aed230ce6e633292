//! Repository trait 定義
//!
//! ドメイン層が必要とするプレゼンス状態へのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::presence::{DisconnectOutcome, Eviction, JoinOutcome, LeaveOutcome};
use super::value_object::{ConnectionId, GroupId, UserId};

/// Presence Repository trait
///
/// Each method is one whole state transition of [`PresenceState`], executed
/// atomically by the implementation, so no caller can observe a registry
/// that disagrees with the room membership index.
///
/// Transitions on missing keys return outcome variants instead of errors:
/// stale references are an expected, non-exceptional condition for the
/// relay.
///
/// [`PresenceState`]: super::presence::PresenceState
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PresenceRepository: Send + Sync {
    /// 接続を登録（同一ユーザーの既存接続は明示的に破棄される）
    async fn register(&self, connection_id: ConnectionId, user_id: UserId) -> Option<Eviction>;

    /// ユーザーをルームに参加させる（元のルームからは暗黙的に離脱）
    async fn join_group(&self, user_id: &UserId, group_id: GroupId) -> JoinOutcome;

    /// ユーザーをルームから離脱させる
    async fn leave_group(&self, user_id: &UserId, group_id: &GroupId) -> LeaveOutcome;

    /// 切断された接続の状態を削除する
    async fn disconnect(&self, connection_id: &ConnectionId) -> DisconnectOutcome;

    /// ルームのメンバー一覧を取得（参加順）
    async fn snapshot(&self, group_id: &GroupId) -> Vec<UserId>;

    /// 接続中のユーザー数を取得
    async fn connection_count(&self) -> usize;

    /// メンバーのいるルーム数を取得
    async fn group_count(&self) -> usize;
}
