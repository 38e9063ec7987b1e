use anyhow::Context as _;
use tracing::info;

use mockdb::config::MockDbConfig;
use mockdb::infra::seed::default_seed;
use mockdb::router::{ENDPOINTS, build_router};
use mockdb::state::AppState;
use mockdb_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = MockDbConfig::from_env();
    let seed = default_seed().context("invalid seed data")?;
    let state = AppState::new(seed);

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("mock database service listening on {addr}");
    for (method, path, description) in ENDPOINTS {
        info!(method, path, "endpoint available: {description}");
    }

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
