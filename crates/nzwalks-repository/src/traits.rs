//! Repository trait definitions.
//!
//! Every lookup by id reports a missing row as `Ok(None)`; errors are
//! reserved for storage failures and constraint violations.

use async_trait::async_trait;
use nzwalks_core::{
    Difficulty, DifficultyId, Interface, NzWalksResult, Region, RegionDraft, RegionId, Walk, WalkDraft, WalkId,
};

/// Region repository trait.
#[async_trait]
pub trait RegionRepository: Interface + Send + Sync {
    /// Returns every region.
    async fn get_all(&self) -> NzWalksResult<Vec<Region>>;

    /// Finds a region by ID.
    async fn get_by_id(&self, id: RegionId) -> NzWalksResult<Option<Region>>;

    /// Stores a new region under a freshly generated ID.
    async fn create(&self, draft: &RegionDraft) -> NzWalksResult<Region>;

    /// Replaces the mutable fields of an existing region.
    async fn update(&self, id: RegionId, draft: &RegionDraft) -> NzWalksResult<Option<Region>>;

    /// Deletes a region, returning the row as it was before deletion.
    async fn delete(&self, id: RegionId) -> NzWalksResult<Option<Region>>;

    /// Counts all regions.
    async fn count(&self) -> NzWalksResult<u64>;
}

/// Walk repository trait.
///
/// Walks returned from reads carry their region and difficulty.
#[async_trait]
pub trait WalkRepository: Interface + Send + Sync {
    /// Returns every walk.
    async fn get_all(&self) -> NzWalksResult<Vec<Walk>>;

    /// Finds a walk by ID.
    async fn get_by_id(&self, id: WalkId) -> NzWalksResult<Option<Walk>>;

    /// Stores a new walk under a freshly generated ID.
    ///
    /// Fails with `ReferentialIntegrity` when the region or difficulty does
    /// not exist.
    async fn create(&self, draft: &WalkDraft) -> NzWalksResult<Walk>;

    /// Replaces the mutable fields of an existing walk.
    async fn update(&self, id: WalkId, draft: &WalkDraft) -> NzWalksResult<Option<Walk>>;

    /// Deletes a walk, returning the row as it was before deletion.
    async fn delete(&self, id: WalkId) -> NzWalksResult<Option<Walk>>;

    /// Counts all walks.
    async fn count(&self) -> NzWalksResult<u64>;
}

/// Difficulty repository trait. Difficulties are read-only reference data.
#[async_trait]
pub trait DifficultyRepository: Interface + Send + Sync {
    /// Returns every difficulty.
    async fn get_all(&self) -> NzWalksResult<Vec<Difficulty>>;

    /// Finds a difficulty by ID.
    async fn get_by_id(&self, id: DifficultyId) -> NzWalksResult<Option<Difficulty>>;

    /// Counts all difficulties.
    async fn count(&self) -> NzWalksResult<u64>;
}
