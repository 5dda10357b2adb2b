//! MySQL difficulty repository implementation.

use super::parse_uuid;
use crate::{traits::DifficultyRepository, DatabasePoolInterface};
use async_trait::async_trait;
use nzwalks_core::{Difficulty, DifficultyId, NzWalksError, NzWalksResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL difficulty repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = DifficultyRepository)]
pub struct MySqlDifficultyRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlDifficultyRepository {
    /// Creates a new MySQL difficulty repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DifficultyRow {
    id: String,
    name: String,
}

impl TryFrom<DifficultyRow> for Difficulty {
    type Error = NzWalksError;

    fn try_from(row: DifficultyRow) -> Result<Self, Self::Error> {
        Ok(Difficulty::new(DifficultyId::from_uuid(parse_uuid(&row.id)?), row.name))
    }
}

#[async_trait]
impl DifficultyRepository for MySqlDifficultyRepository {
    async fn get_all(&self) -> NzWalksResult<Vec<Difficulty>> {
        debug!("Listing difficulties");

        let rows = sqlx::query_as::<_, DifficultyRow>("SELECT id, name FROM difficulties ORDER BY name, id")
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Difficulty::try_from).collect()
    }

    async fn get_by_id(&self, id: DifficultyId) -> NzWalksResult<Option<Difficulty>> {
        debug!("Finding difficulty by id: {}", id);

        let row = sqlx::query_as::<_, DifficultyRow>("SELECT id, name FROM difficulties WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Difficulty::try_from).transpose()
    }

    async fn count(&self) -> NzWalksResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM difficulties")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count.unsigned_abs())
    }
}

impl std::fmt::Debug for MySqlDifficultyRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlDifficultyRepository").finish_non_exhaustive()
    }
}
