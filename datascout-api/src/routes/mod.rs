pub mod health;
pub mod scout;

use axum::{extract::State, response::Json, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::models::RootInfo;
use crate::state::AppState;

// GET / - liveness and service info
pub async fn root(State(state): State<AppState>) -> Json<RootInfo> {
    Json(RootInfo {
        message: state.info.banner.to_string(),
        version: crate::VERSION.to_string(),
        docs: state.info.docs.map(str::to_string),
    })
}

/// Assembles the four-route application shared by both server variants.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health_check))
        .route("/gk", get(scout::get_goalkeepers))
        .route("/fw", get(scout::get_forwards))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
