//! UseCase: ルーム参加処理
//!
//! ユーザーをルームに参加させ、影響を受けたルームにメンバーシップ更新を
//! ブロードキャストします。別ルームに所属していた場合は暗黙的に離脱し、
//! 離脱した側のルームにも更新を流します（UI がメンバー一覧を正しく保つ
//! ため、移動元にも通知する拡張を採用）。

use std::sync::Arc;

use crate::domain::{GroupId, JoinOutcome, MessagePusher, PresenceRepository, UserId};

use super::broadcast_group_members;

/// ルーム参加のユースケース
pub struct JoinGroupUseCase {
    /// Repository（プレゼンス状態の抽象化）
    repository: Arc<dyn PresenceRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinGroupUseCase {
    /// 新しい JoinGroupUseCase を作成
    pub fn new(
        repository: Arc<dyn PresenceRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム参加を実行
    ///
    /// An unknown (not connected) user is a stale reference and a logged
    /// no-op, never an error.
    pub async fn execute(&self, user_id: UserId, group_id: GroupId) {
        match self
            .repository
            .join_group(&user_id, group_id.clone())
            .await
        {
            JoinOutcome::UnknownUser => {
                tracing::warn!(
                    "join-group for unknown user '{}' (group '{}'), ignoring",
                    user_id,
                    group_id
                );
            }
            JoinOutcome::Joined { left_group } => {
                tracing::info!("User '{}' joined group '{}'", user_id, group_id);

                // 移動元のルームにも更新を流す（同一ルームへの再参加を除く）
                if let Some(left) = left_group.filter(|left| *left != group_id) {
                    broadcast_group_members(&*self.repository, &*self.message_pusher, &left).await;
                }
                broadcast_group_members(&*self.repository, &*self.message_pusher, &group_id).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryPresenceRepository,
    };
    use crate::domain::ConnectionId;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    fn group(id: &str) -> GroupId {
        GroupId::new(id.to_string()).unwrap()
    }

    struct Harness {
        usecase: JoinGroupUseCase,
        repository: Arc<InMemoryPresenceRepository>,
        message_pusher: Arc<WebSocketMessagePusher>,
    }

    impl Harness {
        fn new() -> Self {
            let repository = Arc::new(InMemoryPresenceRepository::new());
            let message_pusher = Arc::new(WebSocketMessagePusher::new());
            let usecase = JoinGroupUseCase::new(repository.clone(), message_pusher.clone());
            Self {
                usecase,
                repository,
                message_pusher,
            }
        }

        /// 接続済みユーザーを用意し、受信チャンネルを返す
        async fn connect(&self, id: &str) -> UnboundedReceiver<String> {
            let (tx, rx) = mpsc::unbounded_channel();
            self.repository
                .register(ConnectionId::new(), user(id))
                .await;
            self.message_pusher.register_user(user(id), tx).await;
            rx
        }
    }

    fn drain(rx: &mut UnboundedReceiver<String>) -> Vec<String> {
        let mut messages = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    #[tokio::test]
    async fn test_two_members_joining_same_group_converge_on_snapshot() {
        // テスト項目: A と B が G1 に参加すると両方が count 2 の更新を観測する
        // given (前提条件):
        let harness = Harness::new();
        let mut rx_a = harness.connect("A").await;
        let mut rx_b = harness.connect("B").await;

        // when (操作):
        harness.usecase.execute(user("A"), group("G1")).await;
        harness.usecase.execute(user("B"), group("G1")).await;

        // then (期待する結果):
        let last_for_a = drain(&mut rx_a).pop().unwrap();
        let last_for_b = drain(&mut rx_b).pop().unwrap();
        for last in [last_for_a, last_for_b] {
            let msg: serde_json::Value = serde_json::from_str(&last).unwrap();
            assert_eq!(msg["type"], "group-members-update");
            assert_eq!(msg["count"], 2);
            let members: Vec<&str> = msg["onlineMembers"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_str().unwrap())
                .collect();
            assert_eq!(members, vec!["A", "B"]);
        }
    }

    #[tokio::test]
    async fn test_switch_room_notifies_both_rooms() {
        // テスト項目: ルーム移動で移動元・移動先の両方に更新が流れる
        // given (前提条件):
        let harness = Harness::new();
        let mut rx_a = harness.connect("A").await;
        let mut rx_b = harness.connect("B").await;
        harness.usecase.execute(user("A"), group("room-a")).await;
        harness.usecase.execute(user("B"), group("room-a")).await;
        drain(&mut rx_a);
        drain(&mut rx_b);

        // when (操作):
        harness.usecase.execute(user("A"), group("room-b")).await;

        // then (期待する結果):
        // B（移動元に残る）は A の退出を反映した更新を受け取る
        let updates_b = drain(&mut rx_b);
        assert_eq!(updates_b.len(), 1);
        let msg: serde_json::Value = serde_json::from_str(&updates_b[0]).unwrap();
        assert_eq!(msg["onlineMembers"].as_array().unwrap().len(), 1);
        assert_eq!(msg["onlineMembers"][0], "B");
        // A（移動した本人）は移動先の更新を受け取る
        let updates_a = drain(&mut rx_a);
        let last: serde_json::Value =
            serde_json::from_str(updates_a.last().unwrap()).unwrap();
        assert_eq!(last["onlineMembers"][0], "A");
        assert_eq!(last["count"], 1);
        // 最終状態: A は room-b のみに所属
        assert_eq!(
            harness.repository.snapshot(&group("room-a")).await,
            vec![user("B")]
        );
        assert_eq!(
            harness.repository.snapshot(&group("room-b")).await,
            vec![user("A")]
        );
    }

    #[tokio::test]
    async fn test_join_by_unknown_user_broadcasts_nothing() {
        // テスト項目: 未接続ユーザーの参加要求では何も配信されない
        // given (前提条件):
        let harness = Harness::new();
        let mut rx_a = harness.connect("A").await;
        harness.usecase.execute(user("A"), group("G1")).await;
        drain(&mut rx_a);

        // when (操作):
        harness.usecase.execute(user("ghost"), group("G1")).await;

        // then (期待する結果):
        assert!(drain(&mut rx_a).is_empty());
        assert_eq!(harness.repository.snapshot(&group("G1")).await, vec![user("A")]);
    }
}
