//! Domain layer: value objects, the presence state machine, and the
//! interfaces (repository, message pusher) implemented by infrastructure.

pub mod entity;
pub mod message_pusher;
pub mod presence;
pub mod repository;
pub mod value_object;

pub use entity::ConnectionRecord;
pub use message_pusher::{MessagePushError, MessagePusher, PusherChannel};
pub use presence::{DisconnectOutcome, Eviction, JoinOutcome, LeaveOutcome, PresenceState};
pub use repository::PresenceRepository;
pub use value_object::{ConnectionId, GroupId, UserId, ValidationError};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
#[cfg(test)]
pub use repository::MockPresenceRepository;
