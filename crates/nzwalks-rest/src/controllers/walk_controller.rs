//! Walk controller.

use crate::{
    extractors::{PathId, ValidatedJson},
    responses::{created, found, ApiResult},
    state::AppState,
};
use axum::{
    extract::State,
    response::Response,
    routing::get,
    Json, Router,
};
use nzwalks_core::{ErrorResponse, WalkId};
use nzwalks_service::{AddWalkRequest, UpdateWalkRequest, WalkDto};

/// Creates the walk router, mounted under `/api/walks`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_walks).post(create_walk))
        .route("/:id", get(get_walk).put(update_walk).delete(delete_walk))
}

/// List all walks with their region and difficulty.
#[utoipa::path(
    get,
    path = "/api/walks",
    tag = "walks",
    responses(
        (status = 200, description = "All walks", body = Vec<WalkDto>)
    )
)]
pub async fn list_walks(State(state): State<AppState>) -> ApiResult<Json<Vec<WalkDto>>> {
    let walks = state.walk_service.list_walks().await?;
    Ok(Json(walks))
}

/// Get a walk by ID.
#[utoipa::path(
    get,
    path = "/api/walks/{id}",
    tag = "walks",
    params(("id" = WalkId, Path, description = "Walk ID")),
    responses(
        (status = 200, description = "Walk found", body = WalkDto),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Walk not found")
    )
)]
pub async fn get_walk(State(state): State<AppState>, PathId(id): PathId<WalkId>) -> ApiResult<Response> {
    let walk = state.walk_service.get_walk(id).await?;
    Ok(found(walk))
}

/// Create a new walk.
#[utoipa::path(
    post,
    path = "/api/walks",
    tag = "walks",
    request_body = AddWalkRequest,
    responses(
        (status = 201, description = "Walk created", body = WalkDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 422, description = "Unknown region or difficulty", body = ErrorResponse)
    )
)]
pub async fn create_walk(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddWalkRequest>,
) -> ApiResult<Response> {
    let walk = state.walk_service.create_walk(request).await?;
    Ok(created(format!("/api/walks/{}", walk.id), walk))
}

/// Update a walk.
#[utoipa::path(
    put,
    path = "/api/walks/{id}",
    tag = "walks",
    params(("id" = WalkId, Path, description = "Walk ID")),
    request_body = UpdateWalkRequest,
    responses(
        (status = 200, description = "Walk updated", body = WalkDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Walk not found"),
        (status = 422, description = "Unknown region or difficulty", body = ErrorResponse)
    )
)]
pub async fn update_walk(
    State(state): State<AppState>,
    PathId(id): PathId<WalkId>,
    ValidatedJson(request): ValidatedJson<UpdateWalkRequest>,
) -> ApiResult<Response> {
    let walk = state.walk_service.update_walk(id, request).await?;
    Ok(found(walk))
}

/// Delete a walk.
#[utoipa::path(
    delete,
    path = "/api/walks/{id}",
    tag = "walks",
    params(("id" = WalkId, Path, description = "Walk ID")),
    responses(
        (status = 200, description = "Walk deleted", body = WalkDto),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Walk not found")
    )
)]
pub async fn delete_walk(State(state): State<AppState>, PathId(id): PathId<WalkId>) -> ApiResult<Response> {
    let walk = state.walk_service.delete_walk(id).await?;
    Ok(found(walk))
}
