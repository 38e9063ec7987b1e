use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Mock database service error variants.
#[derive(Debug, thiserror::Error)]
pub enum MockDbError {
    #[error("User not found")]
    UserNotFound,
    #[error("Product not found")]
    ProductNotFound,
    #[error("Not found")]
    RouteNotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for MockDbError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::ProductNotFound | Self::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are already recorded by TraceLayer.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, "internal error");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
