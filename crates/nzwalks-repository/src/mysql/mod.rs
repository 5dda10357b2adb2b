//! MySQL repository implementations.

mod difficulty_repository;
mod region_repository;
mod walk_repository;

pub use difficulty_repository::*;
pub use region_repository::*;
pub use walk_repository::*;

use nzwalks_core::NzWalksError;
use uuid::Uuid;

/// Parses a `CHAR(36)` id column.
fn parse_uuid(value: &str) -> Result<Uuid, NzWalksError> {
    Uuid::parse_str(value).map_err(|e| NzWalksError::Internal(format!("Invalid UUID in database: {}", e)))
}
