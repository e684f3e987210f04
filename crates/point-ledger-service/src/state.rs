//! Application state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::ledger::PointLedger;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The ledger, owning the stores and the per-user lock registry.
    pub ledger: Arc<PointLedger>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(ledger: Arc<PointLedger>, config: ServiceConfig) -> Self {
        Self { ledger, config }
    }
}
