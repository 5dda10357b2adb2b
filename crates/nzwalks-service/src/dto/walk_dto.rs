//! Walk DTOs.

use super::{DifficultyDto, RegionDto};
use nzwalks_core::{DifficultyId, RegionId, WalkId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Walk response DTO with its region and difficulty embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: WalkId,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub region_id: RegionId,
    pub difficulty_id: DifficultyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<DifficultyDto>,
}

/// Request to create a walk.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Name has to be between 3 and 50 characters"
    ))]
    pub name: String,

    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "Length has to be greater than 0 km"))]
    pub length_in_km: f64,

    #[validate(length(max = 2048, message = "Image URL has to be a maximum of 2048 characters"))]
    pub walk_image_url: Option<String>,

    pub difficulty_id: DifficultyId,

    pub region_id: RegionId,
}

/// Request to replace a walk's fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Name has to be between 3 and 50 characters"
    ))]
    pub name: String,

    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "Length has to be greater than 0 km"))]
    pub length_in_km: f64,

    #[validate(length(max = 2048, message = "Image URL has to be a maximum of 2048 characters"))]
    pub walk_image_url: Option<String>,

    pub difficulty_id: DifficultyId,

    pub region_id: RegionId,
}
