use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::Serialize;

use crate::domain::types::Product;
use crate::error::MockDbError;
use crate::handlers::parse_id;
use crate::state::AppState;
use crate::usecase::product::{GetProductUseCase, ListProductsUseCase};

#[derive(Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

// ── GET /products ────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, MockDbError> {
    let usecase = ListProductsUseCase {
        repo: state.product_repo(),
    };
    let products = usecase.execute().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// ── GET /products/{id} ───────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ProductResponse>, MockDbError> {
    let usecase = GetProductUseCase {
        repo: state.product_repo(),
    };
    let product = usecase.execute(parse_id(id)).await?;
    Ok(Json(product.into()))
}
