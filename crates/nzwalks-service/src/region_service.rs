//! Region service trait definition.

use crate::dto::{AddRegionRequest, RegionDto, UpdateRegionRequest};
use async_trait::async_trait;
use nzwalks_core::{Interface, NzWalksResult, RegionId};

/// Region service trait.
///
/// `Ok(None)` means no region exists under the given id.
#[async_trait]
pub trait RegionService: Interface + Send + Sync {
    /// Lists every region.
    async fn list_regions(&self) -> NzWalksResult<Vec<RegionDto>>;

    /// Gets a region by ID.
    async fn get_region(&self, id: RegionId) -> NzWalksResult<Option<RegionDto>>;

    /// Validates and creates a region.
    async fn create_region(&self, request: AddRegionRequest) -> NzWalksResult<RegionDto>;

    /// Validates and replaces a region's fields.
    async fn update_region(&self, id: RegionId, request: UpdateRegionRequest) -> NzWalksResult<Option<RegionDto>>;

    /// Deletes a region, returning it as it was before deletion.
    async fn delete_region(&self, id: RegionId) -> NzWalksResult<Option<RegionDto>>;
}
