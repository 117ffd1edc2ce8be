//! DataScout HTTP service.
//!
//! Exposes two read-only player-statistics collections (goalkeepers and
//! forwards) behind a uniform JSON envelope. The data comes from either an
//! embedded R session hosting the DataScouteR package (`datascout-api`
//! binary) or a pair of pre-computed JSON files (`datascout-api-simple`).

pub mod error;
pub mod models;
pub mod routes;
pub mod source;
pub mod state;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
