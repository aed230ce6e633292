//! Domain entities.

use super::value_object::{ConnectionId, GroupId, UserId};

/// One live transport connection for a logical user.
///
/// Owned exclusively by the connection registry inside [`PresenceState`].
/// At most one record exists per `user_id`; a new connection for the same
/// user supersedes (evicts) the previous record.
///
/// [`PresenceState`]: super::presence::PresenceState
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub connection_id: ConnectionId,
    pub user_id: UserId,
    /// The room the user currently belongs to, if any. Connected users may
    /// not have joined a group yet.
    pub group_id: Option<GroupId>,
}

impl ConnectionRecord {
    pub fn new(connection_id: ConnectionId, user_id: UserId) -> Self {
        Self {
            connection_id,
            user_id,
            group_id: None,
        }
    }
}
