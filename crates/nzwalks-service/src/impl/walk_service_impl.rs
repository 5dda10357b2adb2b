//! Walk service implementation.

use crate::dto::{AddWalkRequest, UpdateWalkRequest, WalkDto};
use crate::walk_service::WalkService;
use async_trait::async_trait;
use nzwalks_core::{NzWalksResult, ValidateExt, WalkDraft, WalkId};
use nzwalks_repository::WalkRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Walk service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = WalkService)]
pub struct WalkServiceComponent {
    #[shaku(inject)]
    walk_repository: Arc<dyn WalkRepository>,
}

impl WalkServiceComponent {
    /// Creates a walk service outside the DI container.
    #[must_use]
    pub fn new(walk_repository: Arc<dyn WalkRepository>) -> Self {
        Self { walk_repository }
    }
}

#[async_trait]
impl WalkService for WalkServiceComponent {
    async fn list_walks(&self) -> NzWalksResult<Vec<WalkDto>> {
        debug!("Listing walks");

        let walks = self.walk_repository.get_all().await?;
        Ok(walks.into_iter().map(WalkDto::from).collect())
    }

    async fn get_walk(&self, id: WalkId) -> NzWalksResult<Option<WalkDto>> {
        debug!("Getting walk: {}", id);

        Ok(self.walk_repository.get_by_id(id).await?.map(WalkDto::from))
    }

    async fn create_walk(&self, request: AddWalkRequest) -> NzWalksResult<WalkDto> {
        debug!("Creating walk: {}", request.name);

        request.validate_request()?;

        let draft = WalkDraft::from(request);
        let walk = self.walk_repository.create(&draft).await?;

        info!("Walk created: {} in region {}", walk.id, walk.region_id);
        Ok(WalkDto::from(walk))
    }

    async fn update_walk(&self, id: WalkId, request: UpdateWalkRequest) -> NzWalksResult<Option<WalkDto>> {
        debug!("Updating walk: {}", id);

        request.validate_request()?;

        let draft = WalkDraft::from(request);
        let updated = self.walk_repository.update(id, &draft).await?;

        if updated.is_some() {
            info!("Walk updated: {}", id);
        }
        Ok(updated.map(WalkDto::from))
    }

    async fn delete_walk(&self, id: WalkId) -> NzWalksResult<Option<WalkDto>> {
        debug!("Deleting walk: {}", id);

        let deleted = self.walk_repository.delete(id).await?;

        if deleted.is_some() {
            info!("Walk deleted: {}", id);
        }
        Ok(deleted.map(WalkDto::from))
    }
}

impl std::fmt::Debug for WalkServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalkServiceComponent").finish_non_exhaustive()
    }
}
