//! Walk service trait definition.

use crate::dto::{AddWalkRequest, UpdateWalkRequest, WalkDto};
use async_trait::async_trait;
use nzwalks_core::{Interface, NzWalksResult, WalkId};

/// Walk service trait.
#[async_trait]
pub trait WalkService: Interface + Send + Sync {
    /// Lists every walk with its region and difficulty.
    async fn list_walks(&self) -> NzWalksResult<Vec<WalkDto>>;

    /// Gets a walk by ID.
    async fn get_walk(&self, id: WalkId) -> NzWalksResult<Option<WalkDto>>;

    /// Validates and creates a walk.
    async fn create_walk(&self, request: AddWalkRequest) -> NzWalksResult<WalkDto>;

    /// Validates and replaces a walk's fields.
    async fn update_walk(&self, id: WalkId, request: UpdateWalkRequest) -> NzWalksResult<Option<WalkDto>>;

    /// Deletes a walk, returning it as it was before deletion.
    async fn delete_walk(&self, id: WalkId) -> NzWalksResult<Option<WalkDto>>;
}
