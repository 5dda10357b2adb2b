//! Region service implementation.

use crate::dto::{AddRegionRequest, RegionDto, UpdateRegionRequest};
use crate::region_service::RegionService;
use async_trait::async_trait;
use nzwalks_core::{NzWalksResult, RegionDraft, RegionId, ValidateExt};
use nzwalks_repository::RegionRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Region service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = RegionService)]
pub struct RegionServiceComponent {
    #[shaku(inject)]
    region_repository: Arc<dyn RegionRepository>,
}

impl RegionServiceComponent {
    /// Creates a region service outside the DI container.
    #[must_use]
    pub fn new(region_repository: Arc<dyn RegionRepository>) -> Self {
        Self { region_repository }
    }
}

#[async_trait]
impl RegionService for RegionServiceComponent {
    async fn list_regions(&self) -> NzWalksResult<Vec<RegionDto>> {
        debug!("Listing regions");

        let regions = self.region_repository.get_all().await?;
        Ok(regions.into_iter().map(RegionDto::from).collect())
    }

    async fn get_region(&self, id: RegionId) -> NzWalksResult<Option<RegionDto>> {
        debug!("Getting region: {}", id);

        Ok(self.region_repository.get_by_id(id).await?.map(RegionDto::from))
    }

    async fn create_region(&self, request: AddRegionRequest) -> NzWalksResult<RegionDto> {
        debug!("Creating region: {}", request.code);

        request.validate_request()?;

        let draft = RegionDraft::from(request);
        let region = self.region_repository.create(&draft).await?;

        info!("Region created: {}", region.id);
        Ok(RegionDto::from(region))
    }

    async fn update_region(&self, id: RegionId, request: UpdateRegionRequest) -> NzWalksResult<Option<RegionDto>> {
        debug!("Updating region: {}", id);

        request.validate_request()?;

        let draft = RegionDraft::from(request);
        let updated = self.region_repository.update(id, &draft).await?;

        if updated.is_some() {
            info!("Region updated: {}", id);
        }
        Ok(updated.map(RegionDto::from))
    }

    async fn delete_region(&self, id: RegionId) -> NzWalksResult<Option<RegionDto>> {
        debug!("Deleting region: {}", id);

        let deleted = self.region_repository.delete(id).await?;

        if deleted.is_some() {
            info!("Region deleted: {}", id);
        }
        Ok(deleted.map(RegionDto::from))
    }
}

impl std::fmt::Debug for RegionServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionServiceComponent").finish_non_exhaustive()
    }
}
