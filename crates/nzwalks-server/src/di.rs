//! Dependency injection module using Shaku.
//!
//! `NzWalksModule` wires the MySQL pool, the three repositories and the
//! three services into a single container for the server process.

use nzwalks_config::DatabaseConfig;
use nzwalks_core::NzWalksResult;
use nzwalks_repository::{DatabasePool, MySqlDifficultyRepository, MySqlRegionRepository, MySqlWalkRepository};
use nzwalks_service::{DifficultyServiceComponent, RegionServiceComponent, WalkServiceComponent};
use shaku::module;
use std::sync::Arc;

module! {
    pub NzWalksModule {
        components = [
            DatabasePool,
            MySqlRegionRepository,
            MySqlWalkRepository,
            MySqlDifficultyRepository,
            RegionServiceComponent,
            WalkServiceComponent,
            DifficultyServiceComponent,
        ],
        providers = [],
    }
}

/// Connects to the database and builds the module around the pool.
pub async fn build_module(db_config: &DatabaseConfig) -> NzWalksResult<Arc<NzWalksModule>> {
    let db_pool = DatabasePool::new(db_config).await?;
    Ok(Arc::new(module_with_pool(db_pool)))
}

/// Builds the module around an already connected pool.
#[must_use]
pub fn module_with_pool(db_pool: DatabasePool) -> NzWalksModule {
    NzWalksModule::builder()
        .with_component_parameters::<DatabasePool>(db_pool.into_parameters())
        .build()
}
