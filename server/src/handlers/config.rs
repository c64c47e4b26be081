use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Shape read by the browser app from `/config.json`.
#[derive(Debug, Serialize)]
pub struct RuntimeConfigResponse {
    pub api_base_url: String,
}

pub async fn get_runtime_config(State(state): State<AppState>) -> Json<RuntimeConfigResponse> {
    Json(RuntimeConfigResponse {
        api_base_url: state.config.backend_url.clone(),
    })
}
