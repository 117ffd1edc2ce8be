//! Static-file source for the simple server variant.
//!
//! Two JSON files, each an array of player records, are read once at
//! startup. A missing or unparsable file becomes an empty collection; the
//! service still starts and answers with an empty result set.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use super::{Collection, SourceError, StatsSource};

const GK_DATA_PATH: &str = "gk_data.json";
const FW_DATA_PATH: &str = "fw_data.json";

/// Data source over two pre-computed JSON files, immutable after load.
pub struct StaticFileSource {
    goalkeepers: Collection,
    forwards: Collection,
}

impl StaticFileSource {
    /// Loads the default file names relative to the working directory,
    /// overridable through the `GK_DATA` / `FW_DATA` environment variables.
    pub fn load() -> StaticFileSource {
        let gk = std::env::var("GK_DATA").unwrap_or_else(|_| GK_DATA_PATH.to_string());
        let fw = std::env::var("FW_DATA").unwrap_or_else(|_| FW_DATA_PATH.to_string());
        Self::from_paths(gk, fw)
    }

    pub fn from_paths(gk: impl AsRef<Path>, fw: impl AsRef<Path>) -> StaticFileSource {
        StaticFileSource {
            goalkeepers: load_collection(gk.as_ref()),
            forwards: load_collection(fw.as_ref()),
        }
    }
}

fn load_collection(path: &Path) -> Collection {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Collection>(&raw) {
        Ok(collection) => {
            tracing::info!("Loaded {} records from {}", collection.len(), path.display());
            collection
        }
        Err(e) => {
            tracing::warn!("Could not parse {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn to_value(collection: &Collection) -> Value {
    Value::Array(collection.iter().cloned().map(Value::Object).collect())
}

#[async_trait]
impl StatsSource for StaticFileSource {
    async fn fetch_goalkeepers(&self) -> Result<Value, SourceError> {
        Ok(to_value(&self.goalkeepers))
    }

    async fn fetch_forwards(&self) -> Result<Value, SourceError> {
        Ok(to_value(&self.forwards))
    }
}
