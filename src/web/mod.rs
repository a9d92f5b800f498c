pub mod answers;
pub mod sessions;

use crate::state::SharedState;
use axum::{routing::get, Router};

async fn health() -> &'static str {
    "OK"
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/sessions", sessions::router(state.clone()))
        .nest("/api/answers", answers::router(state))
}
