use crate::domain::repository::ProductRepository;
use crate::domain::types::Product;
use crate::error::MockDbError;

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> ListProductsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Product>, MockDbError> {
        self.repo.list().await
    }
}

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> GetProductUseCase<R> {
    /// `None` stands for an id that could not be parsed and never matches.
    pub async fn execute(&self, product_id: Option<i64>) -> Result<Product, MockDbError> {
        let Some(product_id) = product_id else {
            tracing::info!(table = "products", "database query with unparsable id");
            return Err(MockDbError::ProductNotFound);
        };
        self.repo
            .find_by_id(product_id)
            .await?
            .ok_or(MockDbError::ProductNotFound)
    }
}
