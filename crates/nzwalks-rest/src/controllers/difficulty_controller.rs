//! Difficulty controller. Difficulties are seeded reference data and read-only.

use crate::{
    extractors::PathId,
    responses::{found, ApiResult},
    state::AppState,
};
use axum::{extract::State, response::Response, routing::get, Json, Router};
use nzwalks_core::{DifficultyId, ErrorResponse};
use nzwalks_service::DifficultyDto;

/// Creates the difficulty router, mounted under `/api/difficulties`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_difficulties))
        .route("/:id", get(get_difficulty))
}

/// List all difficulties.
#[utoipa::path(
    get,
    path = "/api/difficulties",
    tag = "difficulties",
    responses(
        (status = 200, description = "All difficulties", body = Vec<DifficultyDto>)
    )
)]
pub async fn list_difficulties(State(state): State<AppState>) -> ApiResult<Json<Vec<DifficultyDto>>> {
    let difficulties = state.difficulty_service.list_difficulties().await?;
    Ok(Json(difficulties))
}

/// Get a difficulty by ID.
#[utoipa::path(
    get,
    path = "/api/difficulties/{id}",
    tag = "difficulties",
    params(("id" = DifficultyId, Path, description = "Difficulty ID")),
    responses(
        (status = 200, description = "Difficulty found", body = DifficultyDto),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Difficulty not found")
    )
)]
pub async fn get_difficulty(
    State(state): State<AppState>,
    PathId(id): PathId<DifficultyId>,
) -> ApiResult<Response> {
    let difficulty = state.difficulty_service.get_difficulty(id).await?;
    Ok(found(difficulty))
}
