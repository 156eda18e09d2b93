use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/register", post(handlers::register))
        .route("/api/undo", post(handlers::undo))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
