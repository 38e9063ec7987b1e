pub mod fallback;
pub mod info;
pub mod product;
pub mod user;

use axum::extract::{Path, rejection::PathRejection};

/// Parse an `:id` path segment. Anything that is not an `i64` yields `None`,
/// which lookups treat as a miss rather than a validation error. That includes
/// segments axum cannot decode at all, such as invalid UTF-8.
pub(crate) fn parse_id(segment: Result<Path<String>, PathRejection>) -> Option<i64> {
    let Path(raw) = segment.ok()?;
    raw.parse().ok()
}
