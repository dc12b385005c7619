use tracing::{info, warn};

use crate::{
    dto::quiz::QuizSummary,
    error::ServiceError,
    quiz::{error::FetchResult, source::QuizSource},
    services::sse_events,
    state::{SharedState, game::Game},
};

/// Fetch the quiz payload and install it as the current quiz.
///
/// Runs once at startup and again on explicit reload requests only; a
/// failure is terminal for the attempt and is forwarded verbatim onto the
/// event stream. A successful load drops any session created for the
/// previous quiz.
pub async fn load_quiz(state: &SharedState) -> Result<QuizSummary, ServiceError> {
    match fetch_quiz(state).await {
        Ok(game) => {
            let summary = QuizSummary::from(&game);
            info!(total_answers = summary.total_answers, "quiz loaded");
            state.install_quiz(game).await;
            Ok(summary)
        }
        Err(err) => {
            warn!(error = %err, "quiz fetch failed");
            sse_events::broadcast_quiz_error(state.events(), &err);
            Err(err.into())
        }
    }
}

async fn fetch_quiz(state: &SharedState) -> FetchResult<Game> {
    let source = QuizSource::new(state.config().source_url())?;
    let payload = source.fetch_quiz().await?;
    Ok(Game::from(payload))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{config::AppConfig, state::AppState};

    #[tokio::test]
    async fn unconfigured_source_url_fails_and_stays_degraded() {
        let state = AppState::new(AppConfig::for_tests(10, Duration::from_millis(10)));
        let mut events = state.events().subscribe();

        let err = load_quiz(&state).await.unwrap_err();
        assert!(matches!(err, ServiceError::Source(_)));
        assert!(state.is_degraded().await);

        let event = events.try_recv().unwrap();
        assert_eq!(event.event.as_deref(), Some("quiz.error"));
    }
}
