use axum::Json;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    #[serde(serialize_with = "crate::time::serialize_millis")]
    pub timestamp: DateTime<Utc>,
}

impl HealthReport {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now(),
        }
    }
}

/// Handler for `GET /health`: status plus the current UTC time.
pub async fn health() -> Json<HealthReport> {
    Json(HealthReport::healthy())
}

/// Handler for `GET /healthz`, liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`, readiness check. Seed data is loaded before the
/// listener binds, so a running process is always ready.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
