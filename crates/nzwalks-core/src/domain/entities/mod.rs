//! Persisted records and the drafts used to create or replace them.

mod difficulty;
mod region;
mod walk;

pub use difficulty::*;
pub use region::*;
pub use walk::*;
