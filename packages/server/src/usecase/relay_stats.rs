//! UseCase: リレー統計取得
//!
//! liveness エンドポイント向けに接続数とルーム数を返します。

use std::sync::Arc;

use crate::domain::PresenceRepository;

/// リレー統計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayStats {
    /// 接続中のユーザー数
    pub active_connections: usize,
    /// メンバーのいるルーム数
    pub active_groups: usize,
}

/// リレー統計取得のユースケース
pub struct RelayStatsUseCase {
    /// Repository（プレゼンス状態の抽象化）
    repository: Arc<dyn PresenceRepository>,
}

impl RelayStatsUseCase {
    /// 新しい RelayStatsUseCase を作成
    pub fn new(repository: Arc<dyn PresenceRepository>) -> Self {
        Self { repository }
    }

    /// 統計を取得
    pub async fn execute(&self) -> RelayStats {
        RelayStats {
            active_connections: self.repository.connection_count().await,
            active_groups: self.repository.group_count().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, GroupId, UserId};
    use crate::infrastructure::repository::InMemoryPresenceRepository;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    fn group(id: &str) -> GroupId {
        GroupId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_stats_reflect_live_state() {
        // テスト項目: 統計が registry / index の現状を反映する
        // given (前提条件):
        let repository = Arc::new(InMemoryPresenceRepository::new());
        let usecase = RelayStatsUseCase::new(repository.clone());
        repository.register(ConnectionId::new(), user("a")).await;
        repository.register(ConnectionId::new(), user("b")).await;
        repository.join_group(&user("a"), group("g1")).await;

        // when (操作):
        let stats = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(
            stats,
            RelayStats {
                active_connections: 2,
                active_groups: 1,
            }
        );
    }
}
