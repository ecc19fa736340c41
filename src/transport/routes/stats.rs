use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::{
    api::models::{HealthResponse, StatsResponse},
    server::AppState,
};

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /stats
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    tracing::debug!("GET /stats");
    Json(StatsResponse {
        cache_entries: state.cache.len(),
        uptime_ms: state.uptime_ms(),
    })
}
