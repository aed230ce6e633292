//! Server state shared across handlers.

use std::sync::Arc;

use crate::usecase::{
    BuzzUseCase, ConnectUseCase, DisconnectUseCase, JoinGroupUseCase, LeaveGroupUseCase,
    RelayStatsUseCase, StatusUpdateUseCase, WakeUpUseCase,
};

/// Shared application state
pub struct AppState {
    /// ConnectUseCase（接続受付のユースケース）
    pub connect_usecase: Arc<ConnectUseCase>,
    /// DisconnectUseCase（切断のユースケース）
    pub disconnect_usecase: Arc<DisconnectUseCase>,
    /// JoinGroupUseCase（ルーム参加のユースケース）
    pub join_group_usecase: Arc<JoinGroupUseCase>,
    /// LeaveGroupUseCase（ルーム離脱のユースケース）
    pub leave_group_usecase: Arc<LeaveGroupUseCase>,
    /// WakeUpUseCase（起床通知のユースケース）
    pub wake_up_usecase: Arc<WakeUpUseCase>,
    /// StatusUpdateUseCase（ステータス更新のユースケース）
    pub status_update_usecase: Arc<StatusUpdateUseCase>,
    /// BuzzUseCase（起こしリクエストのユースケース）
    pub buzz_usecase: Arc<BuzzUseCase>,
    /// RelayStatsUseCase（リレー統計取得のユースケース）
    pub relay_stats_usecase: Arc<RelayStatsUseCase>,
}
