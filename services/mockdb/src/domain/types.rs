use std::collections::HashSet;
use std::ops::RangeInclusive;

pub const DATABASE_NAME: &str = "mock_database";
pub const DATABASE_VERSION: &str = "1.0.0";
/// Range the cosmetic `connection_count` is drawn from.
pub const CONNECTION_COUNT_RANGE: RangeInclusive<u32> = 1..=10;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseInfo {
    pub database: &'static str,
    pub version: &'static str,
    pub connection_count: u32,
    /// Seconds since the service state was built.
    pub uptime: f64,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SeedError {
    #[error("record id {0} must be at least 1")]
    InvalidId(i64),
    #[error("duplicate user id {0}")]
    DuplicateUserId(i64),
    #[error("duplicate product id {0}")]
    DuplicateProductId(i64),
    #[error("product {id} has invalid price {price}")]
    InvalidPrice { id: i64, price: f64 },
}

/// Fixed in-memory collections served for the lifetime of the process.
///
/// Records keep their insertion order. Fields are private so the collections
/// cannot change after [`SeedData::new`] has validated them.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    users: Vec<User>,
    products: Vec<Product>,
}

impl SeedData {
    pub fn new(users: Vec<User>, products: Vec<Product>) -> Result<Self, SeedError> {
        let mut seen = HashSet::new();
        for user in &users {
            if user.id < 1 {
                return Err(SeedError::InvalidId(user.id));
            }
            if !seen.insert(user.id) {
                return Err(SeedError::DuplicateUserId(user.id));
            }
        }

        seen.clear();
        for product in &products {
            if product.id < 1 {
                return Err(SeedError::InvalidId(product.id));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(SeedError::InvalidPrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if !seen.insert(product.id) {
                return Err(SeedError::DuplicateProductId(product.id));
            }
        }

        Ok(Self { users, products })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
