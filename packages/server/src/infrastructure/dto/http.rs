//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Liveness probe response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    pub status: String,
    /// Number of live registry entries
    pub active_connections: usize,
    /// Number of rooms with at least one member
    pub active_groups: usize,
    /// Server time, RFC 3339 UTC
    pub timestamp: String,
}
