//! MySQL walk repository implementation.

use super::parse_uuid;
use crate::{traits::WalkRepository, DatabasePoolInterface};
use async_trait::async_trait;
use nzwalks_core::{
    Difficulty, DifficultyId, NzWalksError, NzWalksResult, Region, RegionId, Walk, WalkDraft, WalkId,
};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};

/// Walk columns joined with the owning region and difficulty.
const SELECT_WALKS: &str = r#"
    SELECT w.id, w.name, w.description, w.length_in_km, w.walk_image_url,
           w.region_id, w.difficulty_id,
           r.code AS region_code, r.name AS region_name,
           r.region_image_url AS region_image_url,
           d.name AS difficulty_name
    FROM walks w
    INNER JOIN regions r ON r.id = w.region_id
    INNER JOIN difficulties d ON d.id = w.difficulty_id
"#;

/// MySQL walk repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = WalkRepository)]
pub struct MySqlWalkRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlWalkRepository {
    /// Creates a new MySQL walk repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WalkRow {
    id: String,
    name: String,
    description: String,
    length_in_km: f64,
    walk_image_url: Option<String>,
    region_id: String,
    difficulty_id: String,
    region_code: String,
    region_name: String,
    region_image_url: Option<String>,
    difficulty_name: String,
}

impl TryFrom<WalkRow> for Walk {
    type Error = NzWalksError;

    fn try_from(row: WalkRow) -> Result<Self, Self::Error> {
        let region_id = RegionId::from_uuid(parse_uuid(&row.region_id)?);
        let difficulty_id = DifficultyId::from_uuid(parse_uuid(&row.difficulty_id)?);

        let region = Region {
            id: region_id,
            code: row.region_code,
            name: row.region_name,
            region_image_url: row.region_image_url,
        };

        Ok(Walk {
            id: WalkId::from_uuid(parse_uuid(&row.id)?),
            name: row.name,
            description: row.description,
            length_in_km: row.length_in_km,
            walk_image_url: row.walk_image_url,
            region_id,
            difficulty_id,
            region: Some(region),
            difficulty: Some(Difficulty::new(difficulty_id, row.difficulty_name)),
        })
    }
}

#[async_trait]
impl WalkRepository for MySqlWalkRepository {
    async fn get_all(&self) -> NzWalksResult<Vec<Walk>> {
        debug!("Listing walks");

        let rows = sqlx::query_as::<_, WalkRow>(&format!("{SELECT_WALKS} ORDER BY w.name, w.id"))
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Walk::try_from).collect()
    }

    async fn get_by_id(&self, id: WalkId) -> NzWalksResult<Option<Walk>> {
        debug!("Finding walk by id: {}", id);

        let row = sqlx::query_as::<_, WalkRow>(&format!("{SELECT_WALKS} WHERE w.id = ?"))
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Walk::try_from).transpose()
    }

    async fn create(&self, draft: &WalkDraft) -> NzWalksResult<Walk> {
        let id = WalkId::new();
        debug!("Creating walk {} in region {}", id, draft.region_id);

        sqlx::query(
            r#"
            INSERT INTO walks (id, name, description, length_in_km, walk_image_url,
                               region_id, difficulty_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.length_in_km)
        .bind(&draft.walk_image_url)
        .bind(draft.region_id.to_string())
        .bind(draft.difficulty_id.to_string())
        .execute(self.pool.inner())
        .await?;

        info!("Created walk {}", id);

        self.get_by_id(id)
            .await?
            .ok_or_else(|| NzWalksError::Internal("Failed to fetch inserted walk".to_string()))
    }

    async fn update(&self, id: WalkId, draft: &WalkDraft) -> NzWalksResult<Option<Walk>> {
        debug!("Updating walk: {}", id);

        sqlx::query(
            r#"
            UPDATE walks
            SET name = ?, description = ?, length_in_km = ?, walk_image_url = ?,
                region_id = ?, difficulty_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.length_in_km)
        .bind(&draft.walk_image_url)
        .bind(draft.region_id.to_string())
        .bind(draft.difficulty_id.to_string())
        .bind(id.to_string())
        .execute(self.pool.inner())
        .await?;

        let updated = self.get_by_id(id).await?;
        if updated.is_some() {
            info!("Updated walk {}", id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: WalkId) -> NzWalksResult<Option<Walk>> {
        debug!("Deleting walk: {}", id);

        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let result = sqlx::query("DELETE FROM walks WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        info!("Deleted walk {}", id);
        Ok(Some(existing))
    }

    async fn count(&self) -> NzWalksResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM walks")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count.unsigned_abs())
    }
}

impl std::fmt::Debug for MySqlWalkRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlWalkRepository").finish_non_exhaustive()
    }
}
