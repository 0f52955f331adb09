use crate::interface_adapters::handlers::leaderboard;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/api/leaderboard", get(leaderboard))
        .with_state(state)
}
