//! WebSocket message DTOs.
//!
//! Every frame is a JSON object tagged by a `type` field; payload fields
//! are camelCase on the wire. Inbound frames deserialize into one closed
//! [`ClientEvent`] enum so the whole inbound surface is dispatched through
//! a single `match`.

use serde::{Deserialize, Serialize};

/// Outbound message types (relay → client)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    GroupMembersUpdate,
    MemberWokeUp,
    MemberStatusUpdate,
    GetBuzzed,
}

/// Inbound events (client → relay)
///
/// A frame that does not match any variant (unknown type, missing field)
/// fails deserialization and is dropped by the handler; the connection
/// stays open.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    #[serde(rename_all = "camelCase")]
    JoinGroup {
        user_id: String,
        group_id: String,
        user_name: String,
    },
    #[serde(rename_all = "camelCase")]
    LeaveGroup { user_id: String, group_id: String },
    #[serde(rename_all = "camelCase")]
    WakeUp {
        user_id: String,
        group_id: String,
        user_name: String,
        wake_up_time: String,
    },
    #[serde(rename_all = "camelCase")]
    UserStatus {
        user_id: String,
        group_id: String,
        status: String,
    },
    #[serde(rename_all = "camelCase")]
    Buzz {
        user_id: String,
        group_id: String,
        user_name: String,
        target_user_id: String,
    },
}

/// Membership snapshot of a room, broadcast on every join/leave/disconnect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembersUpdateMessage {
    pub r#type: MessageType,
    pub online_members: Vec<String>,
    pub count: usize,
}

/// A member reported being awake; broadcast to the entire room including
/// the sender (multi-device confirmation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWokeUpMessage {
    pub r#type: MessageType,
    pub user_id: String,
    pub user_name: String,
    pub wake_up_time: String,
    pub timestamp: String,
}

/// Free-form status change, broadcast to the entire room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatusUpdateMessage {
    pub r#type: MessageType,
    pub user_id: String,
    pub status: String,
    pub timestamp: String,
}

/// Directed wake-request, sent to a single target only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBuzzedMessage {
    pub r#type: MessageType,
    pub from_user_id: String,
    pub from_user_name: String,
    pub group_id: String,
}
