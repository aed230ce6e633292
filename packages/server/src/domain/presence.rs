//! Pure presence state machine: connection registry + room membership index.
//!
//! This module contains no I/O. Every public method is a whole state
//! transition, so a caller holding the state behind one lock gets an atomic
//! registry+index update and no interleaving can observe a half-applied
//! transition.
//!
//! Invariant maintained by every transition: a user's recorded `group_id`
//! equals the unique room whose member list contains that user (or `None`
//! if no room does). Rooms with no members are pruned.

use std::collections::HashMap;

use super::entity::ConnectionRecord;
use super::value_object::{ConnectionId, GroupId, UserId};

/// Result of superseding an existing connection on `register`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eviction {
    /// The connection id that was orphaned.
    pub connection_id: ConnectionId,
    /// The room the evicted record belonged to, if any. The caller should
    /// re-broadcast membership to it.
    pub group_id: Option<GroupId>,
}

/// Result of a join-group transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined {
        /// The room implicitly left, if the user was in one before.
        left_group: Option<GroupId>,
    },
    /// The user has no live connection; the request is a stale reference.
    UnknownUser,
}

/// Result of a leave-group transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    Left,
    /// The user was not a member of the given room (stale or duplicate
    /// leave request).
    NotAMember,
}

/// Result of a disconnect transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisconnectOutcome {
    Removed {
        user_id: UserId,
        /// The room the user was in at disconnect time, if any.
        group_id: Option<GroupId>,
    },
    /// The connection id is not tracked (already superseded or already
    /// cleaned up). Safe to ignore.
    StaleConnection,
}

/// In-memory presence state: who is connected, and who is in which room.
#[derive(Debug, Default)]
pub struct PresenceState {
    /// Connection registry: one record per logical user.
    registry: HashMap<UserId, ConnectionRecord>,
    /// Room membership index: member lists in insertion order, so
    /// snapshots are deterministic.
    rooms: HashMap<GroupId, Vec<UserId>>,
}

impl PresenceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh connection for `user_id`.
    ///
    /// If the user already has a record, the old record is explicitly
    /// evicted (including its room membership) before the new one is
    /// inserted, and the eviction is reported so membership can be
    /// re-broadcast to the room left behind.
    pub fn register(&mut self, connection_id: ConnectionId, user_id: UserId) -> Option<Eviction> {
        let evicted = self.registry.remove(&user_id).map(|old| {
            if let Some(group_id) = &old.group_id {
                self.remove_from_room(group_id, &old.user_id);
            }
            Eviction {
                connection_id: old.connection_id,
                group_id: old.group_id,
            }
        });

        self.registry
            .insert(user_id.clone(), ConnectionRecord::new(connection_id, user_id));
        evicted
    }

    /// Resolve a connection id to its user, if the connection is current.
    ///
    /// A superseded connection id resolves to nothing: its record was
    /// replaced at re-register time.
    pub fn lookup_by_connection(&self, connection_id: &ConnectionId) -> Option<&UserId> {
        self.registry
            .values()
            .find(|record| record.connection_id == *connection_id)
            .map(|record| &record.user_id)
    }

    /// The room a user currently belongs to, if any.
    pub fn current_group(&self, user_id: &UserId) -> Option<&GroupId> {
        self.registry.get(user_id)?.group_id.as_ref()
    }

    /// Move a user into `group_id`, implicitly leaving any previous room.
    pub fn join_group(&mut self, user_id: &UserId, group_id: GroupId) -> JoinOutcome {
        let Some(record) = self.registry.get_mut(user_id) else {
            return JoinOutcome::UnknownUser;
        };

        let left_group = record.group_id.replace(group_id.clone());
        if let Some(left) = &left_group {
            self.remove_from_room(left, user_id);
        }

        self.rooms
            .entry(group_id)
            .or_default()
            .push(user_id.clone());

        JoinOutcome::Joined { left_group }
    }

    /// Remove a user from `group_id`.
    ///
    /// A stale or duplicate leave (user not a member of that room) is a
    /// no-op reported as such.
    pub fn leave_group(&mut self, user_id: &UserId, group_id: &GroupId) -> LeaveOutcome {
        match self.registry.get_mut(user_id) {
            Some(record) if record.group_id.as_ref() == Some(group_id) => {
                record.group_id = None;
                self.remove_from_room(group_id, user_id);
                LeaveOutcome::Left
            }
            _ => LeaveOutcome::NotAMember,
        }
    }

    /// Drop the record behind a closed connection and clean up its room
    /// membership.
    pub fn disconnect(&mut self, connection_id: &ConnectionId) -> DisconnectOutcome {
        let Some(user_id) = self.lookup_by_connection(connection_id).cloned() else {
            return DisconnectOutcome::StaleConnection;
        };

        let group_id = self
            .registry
            .remove(&user_id)
            .and_then(|record| record.group_id);
        if let Some(group_id) = &group_id {
            self.remove_from_room(group_id, &user_id);
        }

        DisconnectOutcome::Removed { user_id, group_id }
    }

    /// Members of a room in insertion order. Empty if the room is unknown.
    pub fn snapshot(&self, group_id: &GroupId) -> Vec<UserId> {
        self.rooms.get(group_id).cloned().unwrap_or_default()
    }

    /// Number of live connections.
    pub fn connection_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of rooms with at least one member.
    pub fn group_count(&self) -> usize {
        self.rooms.len()
    }

    fn remove_from_room(&mut self, group_id: &GroupId, user_id: &UserId) {
        if let Some(members) = self.rooms.get_mut(group_id) {
            members.retain(|member| member != user_id);
            if members.is_empty() {
                self.rooms.remove(group_id);
            }
        }
    }
}
