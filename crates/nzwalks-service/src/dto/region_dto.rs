//! Region DTOs.

use nzwalks_core::rules::not_blank;
use nzwalks_core::RegionId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Region response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: RegionId,
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}

/// Request to create a region.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddRegionRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 16, message = "Code has to be a maximum of 16 characters")
    )]
    pub code: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Name has to be a maximum of 100 characters")
    )]
    pub name: String,

    #[validate(length(max = 2048, message = "Image URL has to be a maximum of 2048 characters"))]
    pub region_image_url: Option<String>,
}

/// Request to replace a region's fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 16, message = "Code has to be a maximum of 16 characters")
    )]
    pub code: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Name has to be a maximum of 100 characters")
    )]
    pub name: String,

    #[validate(length(max = 2048, message = "Image URL has to be a maximum of 2048 characters"))]
    pub region_image_url: Option<String>,
}
