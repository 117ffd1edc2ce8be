//! Client library for the DataScout API.
//!
//! ```no_run
//! use std::time::Duration;
//! use datascout_client::ScoutClient;
//!
//! # async fn run() -> Result<(), datascout_client::ClientError> {
//! let client = ScoutClient::new("http://localhost:8000", Duration::from_secs(30));
//! let goalkeepers = client.fetch_goalkeepers().await?;
//! println!("{:?}", goalkeepers.shape());
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod frame;

pub use client::{get_forwards, get_goalkeepers, HealthStatus, ScoutClient, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use frame::DataFrame;
