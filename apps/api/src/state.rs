use std::sync::Arc;

use crate::analysis::Analyzers;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Analyzer registry, built once at startup over the configured locale.
    pub analyzers: Arc<Analyzers>,
}
