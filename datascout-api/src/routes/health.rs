use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    r_package_loaded: Option<bool>,
}

// GET /health - readiness probe; always 200, even with an unloaded backend
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        r_package_loaded: state.source.backend_loaded(),
    };

    (StatusCode::OK, Json(response))
}
