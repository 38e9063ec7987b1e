use crate::error::MockDbError;

/// Fallback for unmatched routes so every response stays JSON.
pub async fn route_not_found() -> MockDbError {
    MockDbError::RouteNotFound
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> MockDbError {
    MockDbError::MethodNotAllowed
}
