//! Typed resource id extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use nzwalks_core::NzWalksError;
use std::str::FromStr;

/// Extracts and parses the `{id}` route segment.
///
/// Route ids are captured as plain strings so that a malformed id is a
/// 400 validation error instead of a routing miss.
#[derive(Debug, Clone, Copy)]
pub struct PathId<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathId<T>
where
    T: FromStr + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError(NzWalksError::invalid_field("id", "path", e.body_text())))?;

        parse_id(&raw).map(PathId)
    }
}

/// Parses a resource id, reporting failures against the `id` field.
pub fn parse_id<T: FromStr>(raw: &str) -> Result<T, AppError> {
    raw.parse::<T>().map_err(|_| {
        AppError(NzWalksError::invalid_field(
            "id",
            "invalid_id",
            format!("'{}' is not a valid identifier", raw),
        ))
    })
}
