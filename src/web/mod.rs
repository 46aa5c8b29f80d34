//! HTTP surface of the dashboard.
//!
//! A small axum application: three HTML views, the analyze/demo form
//! actions, the per-report download and a health probe. Shared state is
//! one [`AppState`] behind an `Arc` — the session-keyed report store and
//! the analysis client.

pub mod error;
pub mod handlers;
pub mod router;
pub mod session;

use crate::analysis::AnalysisClient;
use crate::store::ReportStore;

/// Shared application state.
pub struct AppState {
    pub store: ReportStore,
    pub client: AnalysisClient,
}

impl AppState {
    /// State with an explicit analysis client (tests point it at a stub).
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            store: ReportStore::new(),
            client,
        }
    }

    /// State configured from the environment.
    pub fn from_env() -> Self {
        Self::new(AnalysisClient::from_env())
    }
}
