//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use nzwalks_core::{DifficultyId, ErrorResponse, FieldError, RegionId, WalkId};
use nzwalks_service::{
    AddRegionRequest, AddWalkRequest, DifficultyDto, RegionDto, UpdateRegionRequest, UpdateWalkRequest, WalkDto,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the NZ Walks API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NZ Walks API",
        version = "1.0.0",
        description = "CRUD API for New Zealand regions and walking tracks",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Region endpoints
        crate::controllers::region_controller::list_regions,
        crate::controllers::region_controller::get_region,
        crate::controllers::region_controller::create_region,
        crate::controllers::region_controller::update_region,
        crate::controllers::region_controller::delete_region,
        // Walk endpoints
        crate::controllers::walk_controller::list_walks,
        crate::controllers::walk_controller::get_walk,
        crate::controllers::walk_controller::create_walk,
        crate::controllers::walk_controller::update_walk,
        crate::controllers::walk_controller::delete_walk,
        // Difficulty endpoints
        crate::controllers::difficulty_controller::list_difficulties,
        crate::controllers::difficulty_controller::get_difficulty,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            RegionId,
            WalkId,
            DifficultyId,
            ErrorResponse,
            FieldError,
            HealthResponse,
            RegionDto,
            AddRegionRequest,
            UpdateRegionRequest,
            WalkDto,
            AddWalkRequest,
            UpdateWalkRequest,
            DifficultyDto,
        )
    ),
    tags(
        (name = "regions", description = "Region management endpoints"),
        (name = "walks", description = "Walk management endpoints"),
        (name = "difficulties", description = "Difficulty reference data"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
