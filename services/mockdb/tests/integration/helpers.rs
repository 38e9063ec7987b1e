use axum_test::TestServer;

use mockdb::domain::types::SeedData;
use mockdb::infra::seed::default_seed;
use mockdb::router::build_router;
use mockdb::state::AppState;

/// Server over the default seed, the same data the binary serves.
pub fn test_server() -> TestServer {
    server_with_seed(default_seed().unwrap())
}

pub fn server_with_seed(seed: SeedData) -> TestServer {
    TestServer::new(build_router(AppState::new(seed))).unwrap()
}
