use std::time::Instant;

use rand::RngExt;

use crate::domain::types::{
    CONNECTION_COUNT_RANGE, DATABASE_NAME, DATABASE_VERSION, DatabaseInfo,
};

// ── GetInfo ──────────────────────────────────────────────────────────────────

pub struct GetInfoUseCase {
    pub started_at: Instant,
}

impl GetInfoUseCase {
    /// `connection_count` is random on every call; it carries no meaning.
    pub fn execute(&self) -> DatabaseInfo {
        DatabaseInfo {
            database: DATABASE_NAME,
            version: DATABASE_VERSION,
            connection_count: rand::rng().random_range(CONNECTION_COUNT_RANGE),
            uptime: self.started_at.elapsed().as_secs_f64(),
        }
    }
}
