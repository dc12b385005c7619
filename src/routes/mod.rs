use axum::Router;

use crate::state::SharedState;

/// Swagger documentation routes.
pub mod docs;
/// Round control routes.
pub mod game;
/// Health check routes.
pub mod health;
/// Quiz loading routes.
pub mod quiz;
/// Server-sent events routes.
pub mod sse;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(sse::router())
        .merge(game::router())
        .merge(quiz::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
