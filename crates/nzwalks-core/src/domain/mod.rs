//! Domain entities for the NZ Walks API.

pub mod entities;

pub use entities::*;
