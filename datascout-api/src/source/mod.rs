//! Data source adapter.
//!
//! Everything that knows where player statistics come from lives behind
//! [`StatsSource`]. Handlers only see JSON values; the embedded R session and
//! the static-file loader are interchangeable implementations.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod rsession;
pub mod static_file;

/// One player's statistics as a flat key-value mapping.
pub type Record = serde_json::Map<String, Value>;

/// Ordered list of records for one position category.
pub type Collection = Vec<Record>;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The embedded runtime failed to initialize; every fetch fails until
    /// the process is restarted.
    #[error("DataScouteR package not loaded")]
    BackendUnavailable,
    /// The runtime call itself failed.
    #[error("{0}")]
    Runtime(String),
}

/// Supplier of the two statistics collections.
///
/// `fetch_*` returns the collection as a JSON value: normally an array of
/// records, but a source may substitute a plain string rendering when its
/// output cannot be represented as JSON scalars.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_goalkeepers(&self) -> Result<Value, SourceError>;

    async fn fetch_forwards(&self) -> Result<Value, SourceError>;

    /// Readiness of a backing runtime, if the source has one.
    fn backend_loaded(&self) -> Option<bool> {
        None
    }
}
