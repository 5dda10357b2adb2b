//! Data Transfer Objects exchanged over HTTP.

mod difficulty_dto;
mod region_dto;
mod walk_dto;

pub use difficulty_dto::*;
pub use region_dto::*;
pub use walk_dto::*;
