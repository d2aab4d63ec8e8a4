//! Axum request handlers.

use axum::extract::State;

use super::state::AppState;

/// `GET /` — respond with the configured greeting.
///
/// Always 200 with a `text/plain` body; no request data is read.
pub async fn greeting(State(state): State<AppState>) -> String {
    state.greeting.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_GREETING;

    #[tokio::test]
    async fn returns_configured_greeting() {
        let state = AppState::new("custom greeting".into());
        assert_eq!(greeting(State(state)).await, "custom greeting");
    }

    #[tokio::test]
    async fn default_state_returns_default_greeting() {
        assert_eq!(greeting(State(AppState::default())).await, DEFAULT_GREETING);
    }
}
