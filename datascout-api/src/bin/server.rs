//! R-backed DataScout server.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use datascout_api::routes;
use datascout_api::source::rsession::RSessionSource;
use datascout_api::state::{AppState, ServiceInfo};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    dotenvy::dotenv().ok();

    // Probe the R installation once; the server starts either way.
    let source = RSessionSource::init().await;

    let host: Ipv4Addr = std::env::var("HOST")
        .unwrap_or_else(|_| "0.0.0.0".to_string())
        .parse()
        .expect("HOST is not in the correct format");

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .expect("PORT is not the correct format");

    let addr = SocketAddr::from((host, port));

    let state = AppState {
        source: Arc::new(source),
        info: ServiceInfo::FULL,
    };

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
