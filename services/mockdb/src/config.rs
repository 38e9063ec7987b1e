/// Default HTTP port, matching the conventional MySQL port the mock stands in for.
pub const DEFAULT_PORT: u16 = 3306;

/// Mock database service configuration loaded from environment variables.
#[derive(Debug)]
pub struct MockDbConfig {
    /// TCP port for the HTTP server (default 3306). Env var: `PORT`.
    pub port: u16,
}

impl MockDbConfig {
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var("PORT").ok().as_deref()),
        }
    }
}

/// Missing or unparsable values fall back to [`DEFAULT_PORT`].
fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
