//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::DEFAULT_GREETING;

/// Application state shared across all request handlers.
///
/// Read-only after construction, so handlers can clone it freely without
/// synchronisation.
#[derive(Clone)]
pub struct AppState {
    /// Plain-text body returned by the greeting route.
    pub greeting: Arc<str>,
}

impl AppState {
    /// Create a new [`AppState`] with the provided greeting.
    pub fn new(greeting: String) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }
}

impl Default for AppState {
    /// Creates an [`AppState`] with the default greeting, suitable for tests.
    fn default() -> Self {
        Self::new(DEFAULT_GREETING.into())
    }
}
