//! Embedded R runtime source.
//!
//! The DataScouteR package is reached through a narrow boundary: an
//! `Rscript` invocation that renders the requested data frame as JSON via
//! `jsonlite`. Nothing outside this module touches R.

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use tokio::sync::Mutex;

use super::{SourceError, StatsSource};

/// Data source backed by the DataScouteR R package.
pub struct RSessionSource {
    /// `None` when the package failed to load at startup.
    session: Option<Mutex<RSession>>,
}

struct RSession {
    program: String,
}

impl RSessionSource {
    /// Probes the R installation once. On failure the source still
    /// constructs; fetches then fail with [`SourceError::BackendUnavailable`]
    /// and the health endpoint reports the package as not loaded.
    pub async fn init() -> RSessionSource {
        let program = std::env::var("RSCRIPT").unwrap_or_else(|_| "Rscript".to_string());
        Self::with_program(program).await
    }

    /// Like [`init`](Self::init) with an explicit interpreter path.
    pub async fn with_program(program: String) -> RSessionSource {
        let probe = Command::new(&program)
            .arg("--vanilla")
            .arg("-e")
            .arg(r#"invisible(loadNamespace("DataScouteR"))"#)
            .output()
            .await;

        match probe {
            Ok(output) if output.status.success() => {
                tracing::info!("DataScouteR package loaded");
                RSessionSource {
                    session: Some(Mutex::new(RSession { program })),
                }
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                tracing::warn!("Could not load DataScouteR package: {}", stderr.trim());
                RSessionSource { session: None }
            }
            Err(e) => {
                tracing::warn!("Could not start {}: {}", program, e);
                RSessionSource { session: None }
            }
        }
    }

    /// A source whose backend never loaded.
    pub fn unavailable() -> RSessionSource {
        RSessionSource { session: None }
    }

    async fn eval(&self, expr: &str) -> Result<Value, SourceError> {
        let session = self.session.as_ref().ok_or(SourceError::BackendUnavailable)?;
        // The interpreter is single-threaded; one call at a time per handle.
        let session = session.lock().await;
        session.eval_json(expr).await
    }
}

impl RSession {
    async fn eval_json(&self, expr: &str) -> Result<Value, SourceError> {
        let script = format!(
            r#"cat(jsonlite::toJSON({expr}, dataframe = "rows", auto_unbox = TRUE, na = "null"))"#
        );

        let output = Command::new(&self.program)
            .arg("--vanilla")
            .arg("-e")
            .arg(&script)
            .output()
            .await
            .map_err(|e| SourceError::Runtime(format!("failed to launch {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::Runtime(stderr.trim().to_string()));
        }

        let raw = String::from_utf8_lossy(&output.stdout).into_owned();

        // A result that does not render as JSON is passed through as its
        // plain string form instead of failing the request.
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(raw)),
        }
    }
}

#[async_trait]
impl StatsSource for RSessionSource {
    async fn fetch_goalkeepers(&self) -> Result<Value, SourceError> {
        self.eval("DataScouteR::get_gk()").await
    }

    async fn fetch_forwards(&self) -> Result<Value, SourceError> {
        self.eval("DataScouteR::get_fw()").await
    }

    fn backend_loaded(&self) -> Option<bool> {
        Some(self.session.is_some())
    }
}
