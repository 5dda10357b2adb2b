//! Difficulty service trait definition.

use crate::dto::DifficultyDto;
use async_trait::async_trait;
use nzwalks_core::{DifficultyId, Interface, NzWalksResult};

/// Read-only difficulty service trait.
#[async_trait]
pub trait DifficultyService: Interface + Send + Sync {
    /// Lists every difficulty.
    async fn list_difficulties(&self) -> NzWalksResult<Vec<DifficultyDto>>;

    /// Gets a difficulty by ID.
    async fn get_difficulty(&self, id: DifficultyId) -> NzWalksResult<Option<DifficultyDto>>;
}
