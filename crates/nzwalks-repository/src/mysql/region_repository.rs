//! MySQL region repository implementation.

use super::parse_uuid;
use crate::{traits::RegionRepository, DatabasePoolInterface};
use async_trait::async_trait;
use nzwalks_core::{NzWalksError, NzWalksResult, Region, RegionDraft, RegionId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};

/// MySQL region repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = RegionRepository)]
pub struct MySqlRegionRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlRegionRepository {
    /// Creates a new MySQL region repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RegionRow {
    id: String,
    code: String,
    name: String,
    region_image_url: Option<String>,
}

impl TryFrom<RegionRow> for Region {
    type Error = NzWalksError;

    fn try_from(row: RegionRow) -> Result<Self, Self::Error> {
        Ok(Region {
            id: RegionId::from_uuid(parse_uuid(&row.id)?),
            code: row.code,
            name: row.name,
            region_image_url: row.region_image_url,
        })
    }
}

#[async_trait]
impl RegionRepository for MySqlRegionRepository {
    async fn get_all(&self) -> NzWalksResult<Vec<Region>> {
        debug!("Listing regions");

        let rows = sqlx::query_as::<_, RegionRow>(
            "SELECT id, code, name, region_image_url FROM regions ORDER BY name, id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Region::try_from).collect()
    }

    async fn get_by_id(&self, id: RegionId) -> NzWalksResult<Option<Region>> {
        debug!("Finding region by id: {}", id);

        let row = sqlx::query_as::<_, RegionRow>(
            "SELECT id, code, name, region_image_url FROM regions WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Region::try_from).transpose()
    }

    async fn create(&self, draft: &RegionDraft) -> NzWalksResult<Region> {
        let id = RegionId::new();
        debug!("Creating region {} with code {}", id, draft.code);

        sqlx::query("INSERT INTO regions (id, code, name, region_image_url) VALUES (?, ?, ?, ?)")
            .bind(id.to_string())
            .bind(&draft.code)
            .bind(&draft.name)
            .bind(&draft.region_image_url)
            .execute(self.pool.inner())
            .await?;

        info!("Created region {}", id);

        // MySQL has no RETURNING; read the row back
        self.get_by_id(id)
            .await?
            .ok_or_else(|| NzWalksError::Internal("Failed to fetch inserted region".to_string()))
    }

    async fn update(&self, id: RegionId, draft: &RegionDraft) -> NzWalksResult<Option<Region>> {
        debug!("Updating region: {}", id);

        sqlx::query("UPDATE regions SET code = ?, name = ?, region_image_url = ? WHERE id = ?")
            .bind(&draft.code)
            .bind(&draft.name)
            .bind(&draft.region_image_url)
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        // rows_affected() counts changed rows, so an identical update reads 0
        let updated = self.get_by_id(id).await?;
        if updated.is_some() {
            info!("Updated region {}", id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: RegionId) -> NzWalksResult<Option<Region>> {
        debug!("Deleting region: {}", id);

        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let result = sqlx::query("DELETE FROM regions WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        info!("Deleted region {}", id);
        Ok(Some(existing))
    }

    async fn count(&self) -> NzWalksResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM regions")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count.unsigned_abs())
    }
}

impl std::fmt::Debug for MySqlRegionRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlRegionRepository").finish_non_exhaustive()
    }
}
