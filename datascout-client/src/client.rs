use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::frame::DataFrame;

/// Default timeout for data requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The health probe answers fast or not at all.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Envelope shared by every data endpoint.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Body of the service's `/health` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Only reported by the R-backed server variant.
    #[serde(default)]
    pub r_package_loaded: Option<bool>,
}

/// Client for the DataScout API.
///
/// Owns a connection pool that is released when the client is dropped or
/// explicitly [`close`](ScoutClient::close)d.
pub struct ScoutClient {
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl ScoutClient {
    /// `base_url` has any trailing slashes stripped; `timeout` bounds each
    /// data request.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ScoutClient {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        ScoutClient {
            base_url,
            timeout,
            http: reqwest::Client::new(),
        }
    }

    /// Checks that the API is up and healthy.
    pub async fn check_health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
            .map_err(ClientError::Connectivity)?
            .error_for_status()
            .map_err(ClientError::Connectivity)?;

        response.json().await.map_err(ClientError::Connectivity)
    }

    /// Fetches goalkeeper statistics as a [`DataFrame`].
    pub async fn fetch_goalkeepers(&self) -> Result<DataFrame, ClientError> {
        self.fetch("/gk").await
    }

    /// Fetches forward statistics as a [`DataFrame`].
    pub async fn fetch_forwards(&self) -> Result<DataFrame, ClientError> {
        self.fetch("/fw").await
    }

    async fn fetch(&self, endpoint: &str) -> Result<DataFrame, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(ClientError::Request)?
            .error_for_status()
            .map_err(ClientError::Request)?;

        let envelope: Envelope = response.json().await.map_err(ClientError::Request)?;

        if !envelope.success {
            return Err(ClientError::Backend(
                envelope.message.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        Ok(DataFrame::from_result(
            envelope.result.as_ref().unwrap_or(&Value::Null),
        ))
    }

    /// Releases the underlying connection pool. Dropping the client has the
    /// same effect; this makes the release explicit at call sites.
    pub fn close(self) {}
}

/// One-shot fetch of goalkeeper statistics; the client's resources are
/// released before returning.
pub async fn get_goalkeepers(base_url: &str) -> Result<DataFrame, ClientError> {
    let client = ScoutClient::new(base_url, DEFAULT_TIMEOUT);
    let frame = client.fetch_goalkeepers().await;
    client.close();
    frame
}

/// One-shot fetch of forward statistics; the client's resources are released
/// before returning.
pub async fn get_forwards(base_url: &str) -> Result<DataFrame, ClientError> {
    let client = ScoutClient::new(base_url, DEFAULT_TIMEOUT);
    let frame = client.fetch_forwards().await;
    client.close();
    frame
}
