use std::sync::Arc;

use crate::domain::repository::{ProductRepository, UserRepository};
use crate::domain::types::{Product, SeedData, User};
use crate::error::MockDbError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemoryUserRepository {
    pub seed: Arc<SeedData>,
}

impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, MockDbError> {
        tracing::info!(table = "users", query = "SELECT * FROM users", "database query");
        Ok(self.seed.users().to_vec())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, MockDbError> {
        tracing::info!(
            table = "users",
            id,
            query = %format!("SELECT * FROM users WHERE id = {id}"),
            "database query"
        );
        Ok(self.seed.users().iter().find(|u| u.id == id).cloned())
    }
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemoryProductRepository {
    pub seed: Arc<SeedData>,
}

impl ProductRepository for MemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, MockDbError> {
        tracing::info!(
            table = "products",
            query = "SELECT * FROM products",
            "database query"
        );
        Ok(self.seed.products().to_vec())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, MockDbError> {
        tracing::info!(
            table = "products",
            id,
            query = %format!("SELECT * FROM products WHERE id = {id}"),
            "database query"
        );
        Ok(self.seed.products().iter().find(|p| p.id == id).cloned())
    }
}
