use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The `/health` probe could not reach a healthy service: network
    /// failure, timeout, or a non-2xx status.
    #[error("health check failed: {0}")]
    Connectivity(reqwest::Error),

    /// A data request failed at the transport layer: network failure,
    /// timeout, or a non-2xx status.
    #[error("API request failed: {0}")]
    Request(reqwest::Error),

    /// The service answered, but its envelope reported `success = false`.
    #[error("backend error: {0}")]
    Backend(String),
}
