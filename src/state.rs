//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Built once at startup. The root greeting is rendered here so handlers only
/// hand out a shared string.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub greeting: Arc<str>,
}

impl AppState {
    /// Creates a new application state from the resolved configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let greeting = Arc::from(config.greeting());
        Self {
            config: Arc::new(config),
            greeting,
        }
    }
}
