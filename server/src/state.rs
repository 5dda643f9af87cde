//! Application state

use std::sync::Arc;

use crate::config::Config;

/// Shared application state
///
/// This struct implements Clone to allow it to be used as Axum state.
/// The configuration is wrapped in Arc for efficient cloning.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
