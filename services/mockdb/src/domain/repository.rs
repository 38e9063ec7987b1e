#![allow(async_fn_in_trait)]

use crate::domain::types::{Product, User};
use crate::error::MockDbError;

/// Read-only access to user records.
pub trait UserRepository: Send + Sync {
    /// All users in insertion order.
    async fn list(&self) -> Result<Vec<User>, MockDbError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, MockDbError>;
}

/// Read-only access to product records.
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order.
    async fn list(&self) -> Result<Vec<Product>, MockDbError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, MockDbError>;
}
