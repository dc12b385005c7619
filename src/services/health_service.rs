use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the current health payload: degraded until a quiz is loaded.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    if state.is_degraded().await {
        HealthResponse::degraded()
    } else {
        HealthResponse::ok()
    }
}
