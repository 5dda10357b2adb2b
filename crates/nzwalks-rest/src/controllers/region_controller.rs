//! Region controller.

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
use nzwalks_core::{ErrorResponse, RegionId};
use nzwalks_service::{AddRegionRequest, RegionDto, UpdateRegionRequest};

/// Creates the region router, mounted under `/api/regions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_regions).post(create_region))
        .route("/:id", get(get_region).put(update_region).delete(delete_region))
}

/// List all regions.
#[utoipa::path(
    get,
    path = "/api/regions",
    tag = "regions",
    responses(
        (status = 200, description = "All regions", body = Vec<RegionDto>)
    )
)]
pub async fn list_regions(State(state): State<AppState>) -> ApiResult<Json<Vec<RegionDto>>> {
    let regions = state.region_service.list_regions().await?;
    Ok(Json(regions))
}

/// Get a region by ID.
#[utoipa::path(
    get,
    path = "/api/regions/{id}",
    tag = "regions",
    params(("id" = RegionId, Path, description = "Region ID")),
    responses(
        (status = 200, description = "Region found", body = RegionDto),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Region not found")
    )
)]
pub async fn get_region(State(state): State<AppState>, PathId(id): PathId<RegionId>) -> ApiResult<Response> {
    let region = state.region_service.get_region(id).await?;
    Ok(found(region))
}

/// Create a new region.
#[utoipa::path(
    post,
    path = "/api/regions",
    tag = "regions",
    request_body = AddRegionRequest,
    responses(
        (status = 201, description = "Region created", body = RegionDto),
        (status = 400, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_region(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddRegionRequest>,
) -> ApiResult<Response> {
    let region = state.region_service.create_region(request).await?;
    Ok(created(format!("/api/regions/{}", region.id), region))
}

/// Update a region.
#[utoipa::path(
    put,
    path = "/api/regions/{id}",
    tag = "regions",
    params(("id" = RegionId, Path, description = "Region ID")),
    request_body = UpdateRegionRequest,
    responses(
        (status = 200, description = "Region updated", body = RegionDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Region not found")
    )
)]
pub async fn update_region(
    State(state): State<AppState>,
    PathId(id): PathId<RegionId>,
    ValidatedJson(request): ValidatedJson<UpdateRegionRequest>,
) -> ApiResult<Response> {
    let region = state.region_service.update_region(id, request).await?;
    Ok(found(region))
}

/// Delete a region and its walks.
#[utoipa::path(
    delete,
    path = "/api/regions/{id}",
    tag = "regions",
    params(("id" = RegionId, Path, description = "Region ID")),
    responses(
        (status = 200, description = "Region deleted", body = RegionDto),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Region not found")
    )
)]
pub async fn delete_region(State(state): State<AppState>, PathId(id): PathId<RegionId>) -> ApiResult<Response> {
    let region = state.region_service.delete_region(id).await?;
    Ok(found(region))
}
