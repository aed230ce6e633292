//! In-memory `PresenceRepository` implementation.
//!
//! The relay is a single-process, in-memory service: presence does not
//! survive a restart. All state lives behind one `tokio::sync::Mutex`, and
//! each trait method is one lock acquisition over one whole transition of
//! the pure [`PresenceState`], so every registry+index mutation pair is a
//! single critical section.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, DisconnectOutcome, Eviction, GroupId, JoinOutcome, LeaveOutcome,
    PresenceRepository, PresenceState, UserId,
};

/// In-memory presence store
#[derive(Debug, Default)]
pub struct InMemoryPresenceRepository {
    state: Mutex<PresenceState>,
}

impl InMemoryPresenceRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PresenceState::new()),
        }
    }
}

#[async_trait]
impl PresenceRepository for InMemoryPresenceRepository {
    async fn register(&self, connection_id: ConnectionId, user_id: UserId) -> Option<Eviction> {
        self.state.lock().await.register(connection_id, user_id)
    }

    async fn join_group(&self, user_id: &UserId, group_id: GroupId) -> JoinOutcome {
        self.state.lock().await.join_group(user_id, group_id)
    }

    async fn leave_group(&self, user_id: &UserId, group_id: &GroupId) -> LeaveOutcome {
        self.state.lock().await.leave_group(user_id, group_id)
    }

    async fn disconnect(&self, connection_id: &ConnectionId) -> DisconnectOutcome {
        self.state.lock().await.disconnect(connection_id)
    }

    async fn snapshot(&self, group_id: &GroupId) -> Vec<UserId> {
        self.state.lock().await.snapshot(group_id)
    }

    async fn connection_count(&self) -> usize {
        self.state.lock().await.connection_count()
    }

    async fn group_count(&self) -> usize {
        self.state.lock().await.group_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    fn group(id: &str) -> GroupId {
        GroupId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_repository_applies_transitions_atomically_per_call() {
        // テスト項目: register → join → snapshot が repository 経由で一貫する
        // given (前提条件):
        let repo = InMemoryPresenceRepository::new();
        let conn = ConnectionId::new();

        // when (操作):
        let evicted = repo.register(conn, user("alice")).await;
        let outcome = repo.join_group(&user("alice"), group("g1")).await;

        // then (期待する結果):
        assert!(evicted.is_none());
        assert_eq!(outcome, JoinOutcome::Joined { left_group: None });
        assert_eq!(repo.snapshot(&group("g1")).await, vec![user("alice")]);
        assert_eq!(repo.connection_count().await, 1);
        assert_eq!(repo.group_count().await, 1);
    }

    #[tokio::test]
    async fn test_repository_disconnect_cleans_up_counts() {
        // テスト項目: 切断後にカウントがゼロに戻る
        // given (前提条件):
        let repo = InMemoryPresenceRepository::new();
        let conn = ConnectionId::new();
        repo.register(conn, user("alice")).await;
        repo.join_group(&user("alice"), group("g1")).await;

        // when (操作):
        let outcome = repo.disconnect(&conn).await;

        // then (期待する結果):
        assert_eq!(
            outcome,
            DisconnectOutcome::Removed {
                user_id: user("alice"),
                group_id: Some(group("g1")),
            }
        );
        assert_eq!(repo.connection_count().await, 0);
        assert_eq!(repo.group_count().await, 0);
    }

    #[tokio::test]
    async fn test_repository_is_shareable_across_tasks() {
        // テスト項目: Arc 経由で複数タスクから安全に使える
        // given (前提条件):
        let repo = std::sync::Arc::new(InMemoryPresenceRepository::new());

        // when (操作):
        let mut handles = Vec::new();
        for i in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                let uid = user(&format!("user{i}"));
                repo.register(ConnectionId::new(), uid.clone()).await;
                repo.join_group(&uid, group("g1")).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // then (期待する結果):
        assert_eq!(repo.connection_count().await, 8);
        assert_eq!(repo.snapshot(&group("g1")).await.len(), 8);
    }
}
