//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use mezame_shared::time::now_rfc3339;

use crate::infrastructure::dto::http::HealthDto;
use crate::ui::state::AppState;

/// Liveness probe
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    let stats = state.relay_stats_usecase.execute().await;

    Json(HealthDto {
        status: "ok".to_string(),
        active_connections: stats.active_connections,
        active_groups: stats.active_groups,
        timestamp: now_rfc3339(),
    })
}
