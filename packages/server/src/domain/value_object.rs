//! Value objects for the presence relay domain.
//!
//! Identities are caller-supplied opaque strings; the relay does not verify
//! them against any credential store. Validation here only rejects values
//! that can never be meaningful (empty strings).

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Validation errors for domain value objects
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("user id must not be empty")]
    EmptyUserId,
    #[error("group id must not be empty")]
    EmptyGroupId,
}

/// Logical user identity (opaque, caller-supplied)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyUserId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Group ("room") identity (opaque, caller-supplied)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyGroupId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of one live transport connection, generated server-side.
///
/// A reconnecting user gets a fresh `ConnectionId`; the old one becomes
/// stale and later transport-level cleanup for it must resolve to a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_accepts_non_empty_value() {
        // テスト項目: 空でない文字列から UserId が生成できる
        // given (前提条件):
        let value = "alice".to_string();

        // when (操作):
        let result = UserId::new(value);

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_user_id_rejects_empty_value() {
        // テスト項目: 空文字列から UserId が生成できない
        // given (前提条件):
        let value = "".to_string();

        // when (操作):
        let result = UserId::new(value);

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValidationError::EmptyUserId);
    }

    #[test]
    fn test_user_id_rejects_whitespace_only_value() {
        // テスト項目: 空白のみの文字列から UserId が生成できない
        // given (前提条件):
        let value = "   ".to_string();

        // when (操作):
        let result = UserId::new(value);

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValidationError::EmptyUserId);
    }

    #[test]
    fn test_group_id_rejects_empty_value() {
        // テスト項目: 空文字列から GroupId が生成できない
        // given (前提条件):
        let value = "".to_string();

        // when (操作):
        let result = GroupId::new(value);

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValidationError::EmptyGroupId);
    }

    #[test]
    fn test_connection_ids_are_unique() {
        // テスト項目: ConnectionId は生成のたびに一意になる
        // given (前提条件):

        // when (操作):
        let first = ConnectionId::new();
        let second = ConnectionId::new();

        // then (期待する結果):
        assert_ne!(first, second);
    }
}
