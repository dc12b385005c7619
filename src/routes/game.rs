use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::game::{GameSnapshot, GuessRequest},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes controlling the round lifecycle.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/game", get(game_snapshot))
        .route("/game/start", post(start_game))
        .route("/game/guess", post(submit_guess))
        .route("/game/reset", post(reset_game))
}

#[utoipa::path(
    get,
    path = "/game",
    tag = "game",
    responses((status = 200, description = "Current game state", body = GameSnapshot))
)]
/// Return a snapshot of the current game state.
pub async fn game_snapshot(State(state): State<SharedState>) -> Json<GameSnapshot> {
    let snapshot = game_service::game_snapshot(&state).await;
    Json(snapshot)
}

#[utoipa::path(
    post,
    path = "/game/start",
    tag = "game",
    responses(
        (status = 200, description = "Round started", body = GameSnapshot),
        (status = 503, description = "No quiz loaded")
    )
)]
/// Start (or restart) a round for the loaded quiz.
pub async fn start_game(State(state): State<SharedState>) -> Result<Json<GameSnapshot>, AppError> {
    let snapshot = game_service::start_game(&state).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/game/guess",
    tag = "game",
    request_body = GuessRequest,
    responses(
        (status = 200, description = "Guess processed", body = GameSnapshot),
        (status = 400, description = "Invalid guess"),
        (status = 404, description = "No active session")
    )
)]
/// Check a word against the expected answers of the current round.
pub async fn submit_guess(
    State(state): State<SharedState>,
    Json(payload): Json<GuessRequest>,
) -> Result<Json<GameSnapshot>, AppError> {
    payload.validate()?;
    let snapshot = game_service::submit_guess(&state, &payload.word).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/game/reset",
    tag = "game",
    responses(
        (status = 200, description = "Round reset", body = GameSnapshot),
        (status = 404, description = "No active session")
    )
)]
/// End the current round and clear its progress.
pub async fn reset_game(State(state): State<SharedState>) -> Result<Json<GameSnapshot>, AppError> {
    let snapshot = game_service::reset_game(&state).await?;
    Ok(Json(snapshot))
}
