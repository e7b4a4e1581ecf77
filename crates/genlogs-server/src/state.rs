use genlogs::search::{CarrierSource, RouteSearch};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub carriers: Arc<dyn CarrierSource>,
}

impl AppState {
    pub fn new(carriers: impl CarrierSource + 'static) -> Self {
        Self {
            carriers: Arc::new(carriers),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RouteSearch::default())
    }
}
