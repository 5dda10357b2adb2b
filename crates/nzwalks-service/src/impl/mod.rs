//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `region_service.rs`).

pub mod difficulty_service_impl;
pub mod region_service_impl;
pub mod walk_service_impl;

pub use difficulty_service_impl::DifficultyServiceComponent;
pub use region_service_impl::RegionServiceComponent;
pub use walk_service_impl::WalkServiceComponent;
