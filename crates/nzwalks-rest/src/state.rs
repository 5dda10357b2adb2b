//! Application state for Axum handlers.

use nzwalks_repository::DatabasePoolInterface;
use nzwalks_service::{DifficultyService, RegionService, WalkService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub region_service: Arc<dyn RegionService>,
    pub walk_service: Arc<dyn WalkService>,
    pub difficulty_service: Arc<dyn DifficultyService>,
    /// Pool used by the readiness check. Absent in router tests.
    pub database: Option<Arc<dyn DatabasePoolInterface>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        region_service: Arc<dyn RegionService>,
        walk_service: Arc<dyn WalkService>,
        difficulty_service: Arc<dyn DifficultyService>,
    ) -> Self {
        Self {
            region_service,
            walk_service,
            difficulty_service,
            database: None,
        }
    }

    /// Attaches the database pool checked by `/ready`.
    #[must_use]
    pub fn with_database(mut self, database: Arc<dyn DatabasePoolInterface>) -> Self {
        self.database = Some(database);
        self
    }

    /// Resolves every service from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module
            + HasComponent<dyn RegionService>
            + HasComponent<dyn WalkService>
            + HasComponent<dyn DifficultyService>
            + HasComponent<dyn DatabasePoolInterface>,
    {
        let database: Arc<dyn DatabasePoolInterface> = module.resolve();
        Self::new(module.resolve(), module.resolve(), module.resolve()).with_database(database)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("database", &self.database.is_some())
            .finish_non_exhaustive()
    }
}
