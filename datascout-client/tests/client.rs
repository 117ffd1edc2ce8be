use std::time::{Duration, Instant};

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use datascout_client::{get_forwards, get_goalkeepers, ClientError, ScoutClient};

/// Serves `app` on an ephemeral local port and returns its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn canned(body: Value) -> Router {
    Router::new()
        .route("/gk", get({
            let body = body.clone();
            move || async move { Json(body) }
        }))
        .route("/fw", get(move || async move { Json(body) }))
}

#[tokio::test]
async fn materializes_one_row_frame() {
    let base = serve(canned(json!({
        "success": true,
        "result": [{"name": "A", "saves": 5}]
    })))
    .await;

    let client = ScoutClient::new(&base, Duration::from_secs(5));
    let frame = client.fetch_goalkeepers().await.unwrap();

    assert_eq!(frame.shape(), (1, 2));
    assert_eq!(frame.columns(), ["name", "saves"]);
    assert_eq!(frame.column("name").unwrap(), [json!("A")]);
    assert_eq!(frame.column("saves").unwrap(), [json!(5)]);

    client.close();
}

#[tokio::test]
async fn backend_failure_surfaces_message() {
    let base = serve(canned(json!({
        "success": false,
        "result": null,
        "message": "boom"
    })))
    .await;

    let client = ScoutClient::new(&base, Duration::from_secs(5));
    let err = client.fetch_goalkeepers().await.unwrap_err();

    match err {
        ClientError::Backend(message) => assert_eq!(message, "boom"),
        other => panic!("expected backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn backend_failure_without_message_still_fails() {
    let base = serve(canned(json!({"success": false}))).await;

    let client = ScoutClient::new(&base, Duration::from_secs(5));
    match client.fetch_forwards().await.unwrap_err() {
        ClientError::Backend(message) => assert_eq!(message, "Unknown error"),
        other => panic!("expected backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn times_out_within_configured_bound() {
    let app = Router::new().route(
        "/gk",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(json!({"success": true, "result": []}))
        }),
    );
    let base = serve(app).await;

    let client = ScoutClient::new(&base, Duration::from_millis(250));
    let started = Instant::now();
    let err = client.fetch_goalkeepers().await.unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(5));
    match err {
        ClientError::Request(e) => assert!(e.is_timeout()),
        other => panic!("expected request error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_is_a_request_error() {
    let app = Router::new().route(
        "/gk",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded") }),
    );
    let base = serve(app).await;

    let client = ScoutClient::new(&base, Duration::from_secs(5));
    match client.fetch_goalkeepers().await.unwrap_err() {
        ClientError::Request(e) => assert!(e.is_status()),
        other => panic!("expected request error, got {other:?}"),
    }
}

#[tokio::test]
async fn health_check_parses_status() {
    let app = Router::new().route(
        "/health",
        get(|| async {
            Json(json!({
                "status": "healthy",
                "timestamp": 1_700_000_000,
                "r_package_loaded": false
            }))
        }),
    );
    let base = serve(app).await;

    let client = ScoutClient::new(&base, Duration::from_secs(5));
    let health = client.check_health().await.unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.r_package_loaded, Some(false));
}

#[tokio::test]
async fn unreachable_service_is_a_connectivity_error() {
    // Nothing listens on this port.
    let client = ScoutClient::new("http://127.0.0.1:1", Duration::from_secs(1));
    match client.check_health().await.unwrap_err() {
        ClientError::Connectivity(_) => {}
        other => panic!("expected connectivity error, got {other:?}"),
    }
}

#[tokio::test]
async fn one_shot_helpers_fetch_and_release() {
    let base = serve(canned(json!({
        "success": true,
        "result": [{"name": "A", "goals": 12}]
    })))
    .await;

    let goalkeepers = get_goalkeepers(&base).await.unwrap();
    assert_eq!(goalkeepers.shape(), (1, 2));

    let forwards = get_forwards(&base).await.unwrap();
    assert_eq!(forwards.column("goals").unwrap(), [json!(12)]);
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let base = serve(canned(json!({"success": true, "result": []}))).await;

    let client = ScoutClient::new(format!("{base}/"), Duration::from_secs(5));
    let frame = client.fetch_goalkeepers().await.unwrap();
    assert!(frame.is_empty());
}
