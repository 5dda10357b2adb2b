//! Difficulty DTOs.

use nzwalks_core::DifficultyId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Difficulty response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyDto {
    pub id: DifficultyId,
    pub name: String,
}
