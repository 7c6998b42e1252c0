//! Application state for dependency injection.

use std::sync::Arc;

use domain::{KnownPersonIds, PersonDirectory};

use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only existence lookup for person IDs
    pub directory: Arc<dyn PersonDirectory>,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(directory: Arc<dyn PersonDirectory>, config: ApiConfig) -> Self {
        Self { directory, config }
    }

    /// State backed by the fixed set of known person IDs.
    pub fn from_config(config: ApiConfig) -> Self {
        Self::new(Arc::new(KnownPersonIds::default()), config)
    }
}
