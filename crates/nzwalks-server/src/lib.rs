//! # NZ Walks Server Library
//!
//! Dependency injection wiring and startup helpers for the NZ Walks
//! server binary.

pub mod di;
pub mod startup;
