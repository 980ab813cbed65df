//! Application state for the severance engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, PolicyConfig};

/// Shared application state.
///
/// Holds the loaded labor-code policy, shared read-only across handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the active policy.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.config()
    }
}
