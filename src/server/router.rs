//! Axum router construction.

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`].
///
/// Exactly one route is registered; everything else gets axum's default
/// responses (404 for unknown paths, 405 for unsupported methods).
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::greeting))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(middleware::REQUEST_TIMEOUT))
        .with_state(state)
}
