//! Result type aliases for the NZ Walks API.

use crate::NzWalksError;

/// A specialized `Result` type for NZ Walks operations.
pub type NzWalksResult<T> = Result<T, NzWalksError>;
