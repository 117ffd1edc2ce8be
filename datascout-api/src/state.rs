use std::sync::Arc;

use crate::source::StatsSource;

/// Shared state handed to every request handler. Built once at startup and
/// read-only afterwards, so tests can substitute a fixture source without
/// touching process state.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn StatsSource>,
    pub info: ServiceInfo,
}

/// Per-variant presentation details for the root and data endpoints.
#[derive(Clone, Copy)]
pub struct ServiceInfo {
    pub banner: &'static str,
    pub docs: Option<&'static str>,
    /// Whether data envelopes carry a human-readable success message.
    pub with_messages: bool,
}

impl ServiceInfo {
    /// R-backed server.
    pub const FULL: ServiceInfo = ServiceInfo {
        banner: "DataScout API is running",
        docs: Some("/docs"),
        with_messages: true,
    };

    /// Static-file server.
    pub const SIMPLE: ServiceInfo = ServiceInfo {
        banner: "DataScout API",
        docs: None,
        with_messages: false,
    };
}
