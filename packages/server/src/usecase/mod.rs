//! UseCase layer: one use case per inbound relay operation.
//!
//! This layer is the presence coordinator: it owns the orchestration of
//! repository transitions and the outward broadcasts, so transport code
//! never touches the presence maps directly.

pub mod buzz;
pub mod connect;
pub mod disconnect;
pub mod join_group;
pub mod leave_group;
pub mod relay_stats;
pub mod status_update;
pub mod wake_up;

pub use buzz::BuzzUseCase;
pub use connect::ConnectUseCase;
pub use disconnect::DisconnectUseCase;
pub use join_group::JoinGroupUseCase;
pub use leave_group::LeaveGroupUseCase;
pub use relay_stats::{RelayStats, RelayStatsUseCase};
pub use status_update::StatusUpdateUseCase;
pub use wake_up::WakeUpUseCase;

use crate::domain::{GroupId, MessagePusher, PresenceRepository};
use crate::infrastructure::dto::websocket::{GroupMembersUpdateMessage, MessageType};

/// Broadcast the current membership snapshot of a room to its members.
///
/// Emitted after every join/leave/disconnect/eviction. A room that became
/// empty has nobody left to notify, so the broadcast degenerates to a
/// no-op.
pub(crate) async fn broadcast_group_members(
    repository: &dyn PresenceRepository,
    message_pusher: &dyn MessagePusher,
    group_id: &GroupId,
) {
    let members = repository.snapshot(group_id).await;
    let msg = GroupMembersUpdateMessage {
        r#type: MessageType::GroupMembersUpdate,
        online_members: members.iter().map(|m| m.to_string()).collect(),
        count: members.len(),
    };
    let json = serde_json::to_string(&msg).unwrap();

    tracing::debug!(
        "Broadcasting group-members-update to '{}' ({} members)",
        group_id,
        members.len()
    );
    message_pusher.broadcast(members, &json).await;
}
