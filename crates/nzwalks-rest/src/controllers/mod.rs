//! REST API controllers.

pub mod difficulty_controller;
pub mod health_controller;
pub mod region_controller;
pub mod walk_controller;

pub use health_controller::HealthResponse;
