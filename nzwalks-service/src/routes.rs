//! HTTP routes for the region, walk and difficulty collections
//!
//! Path ids are extracted as [`Uuid`], so a malformed id is rejected with
//! 400 before any handler runs.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::handlers::{ApiError, CollectionHandler, OptionalJson, ReferenceHandler};
use crate::health::{health, readiness};
use crate::models::{
    AddRegionRequest, AddWalkRequest, RegionDto, UpdateRegionRequest, UpdateWalkRequest,
    WalkDifficultyDto, WalkDto,
};
use crate::responses::Created;
use crate::state::AppState;

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(readiness))
        .route("/regions", get(list_regions).post(add_region))
        .route(
            "/regions/{id}",
            get(get_region).put(update_region).delete(delete_region),
        )
        .route("/walks", get(list_walks).post(add_walk))
        .route(
            "/walks/{id}",
            get(get_walk).put(update_walk).delete(delete_walk),
        )
        .route("/walkdifficulties", get(list_difficulties))
        .route("/walkdifficulties/{id}", get(get_difficulty))
        .with_state(state)
}

async fn list_regions(State(state): State<AppState>) -> Result<Json<Vec<RegionDto>>, ApiError> {
    state.region_handler().list().await.map(Json)
}

async fn get_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RegionDto>, ApiError> {
    state.region_handler().get(id).await.map(Json)
}

async fn add_region(
    State(state): State<AppState>,
    OptionalJson(request): OptionalJson<AddRegionRequest>,
) -> Result<Created<RegionDto>, ApiError> {
    let region = state.region_handler().add(request).await?;
    let location = format!("/regions/{}", region.id);
    Ok(Created::new(region).with_location(location))
}

async fn update_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    OptionalJson(request): OptionalJson<UpdateRegionRequest>,
) -> Result<Json<RegionDto>, ApiError> {
    state.region_handler().update(id, request).await.map(Json)
}

async fn delete_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RegionDto>, ApiError> {
    state.region_handler().delete(id).await.map(Json)
}

async fn list_walks(State(state): State<AppState>) -> Result<Json<Vec<WalkDto>>, ApiError> {
    state.walk_handler().list().await.map(Json)
}

async fn get_walk(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WalkDto>, ApiError> {
    state.walk_handler().get(id).await.map(Json)
}

async fn add_walk(
    State(state): State<AppState>,
    OptionalJson(request): OptionalJson<AddWalkRequest>,
) -> Result<Created<WalkDto>, ApiError> {
    let walk = state.walk_handler().add(request).await?;
    let location = format!("/walks/{}", walk.id);
    Ok(Created::new(walk).with_location(location))
}

async fn update_walk(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    OptionalJson(request): OptionalJson<UpdateWalkRequest>,
) -> Result<Json<WalkDto>, ApiError> {
    state.walk_handler().update(id, request).await.map(Json)
}

async fn delete_walk(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WalkDto>, ApiError> {
    state.walk_handler().delete(id).await.map(Json)
}

async fn list_difficulties(
    State(state): State<AppState>,
) -> Result<Json<Vec<WalkDifficultyDto>>, ApiError> {
    state.difficulty_handler().list().await.map(Json)
}

async fn get_difficulty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WalkDifficultyDto>, ApiError> {
    state.difficulty_handler().get(id).await.map(Json)
}
