use std::sync::Arc;
use std::time::Instant;

use crate::domain::types::SeedData;
use crate::infra::memory::{MemoryProductRepository, MemoryUserRepository};

/// Shared application state passed to every handler via axum `State`.
///
/// The seed is immutable once built, so clones share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub seed: Arc<SeedData>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(seed: SeedData) -> Self {
        Self {
            seed: Arc::new(seed),
            started_at: Instant::now(),
        }
    }

    pub fn user_repo(&self) -> MemoryUserRepository {
        MemoryUserRepository {
            seed: Arc::clone(&self.seed),
        }
    }

    pub fn product_repo(&self) -> MemoryProductRepository {
        MemoryProductRepository {
            seed: Arc::clone(&self.seed),
        }
    }
}
