use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::{
    api::models::{CollectionResponse, RecommendResponse, SearchResponse, SongResponse},
    common::errors::ApiError,
    server::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /search?q=
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    tracing::debug!("GET /search: q='{}'", query.q);
    state.jiosaavn.search(&query.q).await.map(Json)
}

/// GET /song/{id}
pub async fn song(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SongResponse>, ApiError> {
    tracing::debug!("GET /song/{}", id);
    state.jiosaavn.song(&id).await.map(Json)
}

/// GET /album/{id}
pub async fn album(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CollectionResponse>, ApiError> {
    tracing::debug!("GET /album/{}", id);
    state.jiosaavn.album(&id).await.map(Json)
}

/// GET /playlist/{id}
pub async fn playlist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CollectionResponse>, ApiError> {
    tracing::debug!("GET /playlist/{}", id);
    state.jiosaavn.playlist(&id).await.map(Json)
}

/// POST /recommend
pub async fn recommend(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecommendResponse>, ApiError> {
    tracing::debug!("POST /recommend");
    state.jiosaavn.recommendations().await.map(Json)
}
