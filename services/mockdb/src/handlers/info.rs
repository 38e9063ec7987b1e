use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::types::DatabaseInfo;
use crate::state::AppState;
use crate::usecase::info::GetInfoUseCase;

#[derive(Serialize)]
pub struct InfoResponse {
    pub database: &'static str,
    pub version: &'static str,
    pub connection_count: u32,
    pub uptime: f64,
}

impl From<DatabaseInfo> for InfoResponse {
    fn from(info: DatabaseInfo) -> Self {
        Self {
            database: info.database,
            version: info.version,
            connection_count: info.connection_count,
            uptime: info.uptime,
        }
    }
}

// ── GET /info ────────────────────────────────────────────────────────────────

pub async fn get_info(State(state): State<AppState>) -> Json<InfoResponse> {
    let usecase = GetInfoUseCase {
        started_at: state.started_at,
    };
    Json(usecase.execute().into())
}
