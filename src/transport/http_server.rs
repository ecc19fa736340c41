use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    server::AppState,
    transport::{
        middleware::add_response_headers,
        routes::{catalog, stats},
    },
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search", get(catalog::search))
        .route("/song/{id}", get(catalog::song))
        .route("/album/{id}", get(catalog::album))
        .route("/playlist/{id}", get(catalog::playlist))
        .route("/recommend", post(catalog::recommend))
        .route("/health", get(stats::health))
        .route("/stats", get(stats::get_stats))
        .layer(middleware::from_fn(add_response_headers))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
