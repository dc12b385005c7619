use axum::{Json, Router, extract::State, routing::post};

use crate::{dto::quiz::QuizSummary, error::AppError, services::quiz_service, state::SharedState};

/// Routes handling quiz payload loading.
pub fn router() -> Router<SharedState> {
    Router::new().route("/quiz/reload", post(reload_quiz))
}

#[utoipa::path(
    post,
    path = "/quiz/reload",
    tag = "quiz",
    responses(
        (status = 200, description = "Quiz fetched and installed", body = QuizSummary),
        (status = 502, description = "Quiz source failed")
    )
)]
/// Fetch the quiz payload again and install it, dropping any current session.
pub async fn reload_quiz(State(state): State<SharedState>) -> Result<Json<QuizSummary>, AppError> {
    let summary = quiz_service::load_quiz(&state).await?;
    Ok(Json(summary))
}
