//! # NZ Walks Service
//!
//! Application services for the NZ Walks API. Each service validates the
//! incoming request, maps it to an entity draft, delegates to its repository
//! and maps the result back to a DTO.

pub mod difficulty_service;
pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod region_service;
pub mod walk_service;

pub use difficulty_service::*;
pub use dto::*;
pub use r#impl::*;
pub use region_service::*;
pub use walk_service::*;
