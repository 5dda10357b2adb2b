//! # NZ Walks Repository
//!
//! Data access for regions, walks and difficulties.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn RegionRepository>     (repository interface)
//! MySqlRegionRepository              (SQLx implementation)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```
//!
//! Schema migrations live in the workspace `migrations/` directory and are
//! embedded at compile time by [`DatabasePoolInterface::run_migrations`].

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
