use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::models::ScoutResponse;
use crate::state::AppState;

// GET /gk - goalkeeper statistics
pub async fn get_goalkeepers(
    State(state): State<AppState>,
) -> Result<Json<ScoutResponse>, ApiError> {
    let result = state.source.fetch_goalkeepers().await.map_err(|e| {
        tracing::error!("Failed to fetch goalkeeper data: {}", e);
        ApiError::from(e)
    })?;

    let message = state
        .info
        .with_messages
        .then(|| "Goalkeeper data retrieved successfully".to_string());

    Ok(Json(ScoutResponse::ok(result, message)))
}

// GET /fw - forward statistics
pub async fn get_forwards(State(state): State<AppState>) -> Result<Json<ScoutResponse>, ApiError> {
    let result = state.source.fetch_forwards().await.map_err(|e| {
        tracing::error!("Failed to fetch forward data: {}", e);
        ApiError::from(e)
    })?;

    let message = state
        .info
        .with_messages
        .then(|| "Forward data retrieved successfully".to_string());

    Ok(Json(ScoutResponse::ok(result, message)))
}
