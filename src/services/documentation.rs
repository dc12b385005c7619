use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Word Blitz Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::game_snapshot,
        crate::routes::game::start_game,
        crate::routes::game::submit_guess,
        crate::routes::game::reset_game,
        crate::routes::quiz::reload_quiz,
        crate::routes::sse::events_stream,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::GuessRequest,
            crate::dto::game::GameSnapshot,
            crate::dto::phase::VisiblePhase,
            crate::dto::quiz::QuizSummary,
            crate::dto::sse::Handshake,
            crate::dto::sse::ScoreUpdatedEvent,
            crate::dto::sse::TimeUpdatedEvent,
            crate::dto::sse::GameFinishedEvent,
            crate::dto::sse::QuizErrorEvent,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "game", description = "Round control: start, guess, reset, snapshot"),
        (name = "quiz", description = "Quiz payload loading"),
        (name = "sse", description = "Server-sent events stream"),
    )
)]
pub struct ApiDoc;
