use tokio::time::{Instant, interval_at};

use crate::{
    dto::game::GameSnapshot,
    error::ServiceError,
    services::sse_events,
    state::{
        SharedState, SseHub,
        session::{GameSession, SessionHooks},
    },
};

/// Create or restart the session for the loaded quiz and arm its clock.
///
/// Starting while a round is already running restarts it from scratch; the
/// superseded clock task retires on its next tick.
pub async fn start_game(state: &SharedState) -> Result<GameSnapshot, ServiceError> {
    let mut slot = state.session().write().await;

    if slot.is_none() {
        let quiz = state.quiz().read().await;
        let game = quiz.clone().ok_or(ServiceError::Degraded)?;
        drop(quiz);

        *slot = Some(GameSession::new(
            game,
            state.config().time_budget_secs(),
            session_hooks(state.events().clone()),
        ));
    }

    let session = slot.as_mut().ok_or(ServiceError::Degraded)?;
    session.start();
    let epoch = session.clock_epoch();
    let snapshot = GameSnapshot::from(&*session);
    drop(slot);

    spawn_session_clock(state.clone(), epoch);
    Ok(snapshot)
}

/// Check a submitted word against the current round.
///
/// Guesses outside a running round are silently ignored (the snapshot comes
/// back unchanged); only a missing session is an error.
pub async fn submit_guess(state: &SharedState, word: &str) -> Result<GameSnapshot, ServiceError> {
    let mut slot = state.session().write().await;
    let session = slot.as_mut().ok_or_else(no_session)?;

    session.check_keyword(word);
    Ok(GameSnapshot::from(&*session))
}

/// End the current round and clear its progress, keeping the session armed
/// for a fresh start against the same quiz.
pub async fn reset_game(state: &SharedState) -> Result<GameSnapshot, ServiceError> {
    let mut slot = state.session().write().await;
    let session = slot.as_mut().ok_or_else(no_session)?;

    session.reset();
    Ok(GameSnapshot::from(&*session))
}

/// Synchronous projection of the current game state.
pub async fn game_snapshot(state: &SharedState) -> GameSnapshot {
    let slot = state.session().read().await;
    match slot.as_ref() {
        Some(session) => GameSnapshot::from(session),
        None => {
            let quiz = state.quiz().read().await;
            GameSnapshot::idle(quiz.as_ref(), state.config().time_budget_secs())
        }
    }
}

fn no_session() -> ServiceError {
    ServiceError::NotFound("no active game session".into())
}

/// Wire the session notification hooks to the SSE hub.
fn session_hooks(hub: SseHub) -> SessionHooks {
    let score_hub = hub.clone();
    let time_hub = hub.clone();

    SessionHooks::new(
        Box::new(move |score| sse_events::broadcast_score_updated(&score_hub, score)),
        Box::new(move |remaining| sse_events::broadcast_time_updated(&time_hub, remaining)),
        Box::new(move |outcome| sse_events::broadcast_game_finished(&hub, outcome)),
    )
}

/// Drive the session clock: one `tick` per configured period.
///
/// The task retires once the session is gone, no longer running, or was
/// restarted (its epoch moved past the one captured here). Ticks take the
/// session write lock, so they serialise with guess submissions.
fn spawn_session_clock(state: SharedState, epoch: u64) {
    let period = state.config().tick_period();

    tokio::spawn(async move {
        let mut clock = interval_at(Instant::now() + period, period);
        loop {
            clock.tick().await;

            let mut slot = state.session().write().await;
            let Some(session) = slot.as_mut() else {
                break;
            };
            if session.clock_epoch() != epoch || !session.is_running() {
                break;
            }
            session.tick();
        }
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::broadcast::error::TryRecvError;
    use tokio::time::sleep;

    use super::*;
    use crate::{
        config::AppConfig,
        dto::phase::VisiblePhase,
        state::{AppState, game::Game},
    };

    fn test_state(budget_secs: u64) -> SharedState {
        AppState::new(AppConfig::for_tests(
            budget_secs,
            Duration::from_millis(10),
        ))
    }

    async fn loaded_state(budget_secs: u64) -> SharedState {
        let state = test_state(budget_secs);
        state
            .install_quiz(Game::new(
                Some("Name all Java keywords".into()),
                vec!["abstract".into(), "public".into()],
            ))
            .await;
        state
    }

    fn drain_event_names(
        receiver: &mut tokio::sync::broadcast::Receiver<crate::dto::sse::ServerEvent>,
    ) -> Vec<String> {
        let mut names = Vec::new();
        loop {
            match receiver.try_recv() {
                Ok(event) => names.push(event.event.unwrap_or_default()),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                Err(TryRecvError::Lagged(_)) => continue,
            }
        }
        names
    }

    #[tokio::test]
    async fn starting_without_a_quiz_is_degraded() {
        let state = test_state(10);
        let err = start_game(&state).await.unwrap_err();
        assert!(matches!(err, ServiceError::Degraded));
    }

    #[tokio::test]
    async fn guessing_without_a_session_is_not_found() {
        let state = loaded_state(10).await;
        let err = submit_guess(&state, "abstract").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn snapshot_is_idle_before_any_start() {
        let state = loaded_state(10).await;
        let snapshot = game_snapshot(&state).await;
        assert_eq!(snapshot.phase, VisiblePhase::Idle);
        assert_eq!(snapshot.total, 2);
    }

    #[tokio::test]
    async fn finding_every_answer_finishes_the_round_with_a_win() {
        let state = loaded_state(60).await;
        let mut events = state.events().subscribe();

        let snapshot = start_game(&state).await.unwrap();
        assert_eq!(snapshot.phase, VisiblePhase::Running);

        let snapshot = submit_guess(&state, "abstract").await.unwrap();
        assert_eq!(snapshot.score, 1);

        let snapshot = submit_guess(&state, "public").await.unwrap();
        assert_eq!(snapshot.phase, VisiblePhase::Finished);
        assert_eq!(snapshot.score, 2);

        let names = drain_event_names(&mut events);
        assert!(names.contains(&"score.updated".to_string()));
        assert!(names.contains(&"game.finished".to_string()));
    }

    #[tokio::test]
    async fn the_clock_times_a_round_out_into_a_loss() {
        let state = loaded_state(2).await;
        let mut events = state.events().subscribe();

        start_game(&state).await.unwrap();
        sleep(Duration::from_millis(200)).await;

        let snapshot = game_snapshot(&state).await;
        assert_eq!(snapshot.phase, VisiblePhase::Finished);

        let names = drain_event_names(&mut events);
        assert!(names.contains(&"time.updated".to_string()));
        assert!(names.contains(&"game.finished".to_string()));
    }

    #[tokio::test]
    async fn restarting_resets_round_progress() {
        let state = loaded_state(60).await;

        start_game(&state).await.unwrap();
        submit_guess(&state, "abstract").await.unwrap();

        let snapshot = start_game(&state).await.unwrap();
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.phase, VisiblePhase::Running);
        assert!(snapshot.found.is_empty());
    }

    #[tokio::test]
    async fn guesses_after_a_reset_are_silently_ignored() {
        let state = loaded_state(60).await;

        start_game(&state).await.unwrap();
        reset_game(&state).await.unwrap();

        let snapshot = submit_guess(&state, "abstract").await.unwrap();
        assert_eq!(snapshot.phase, VisiblePhase::Finished);
        assert_eq!(snapshot.score, 0);
    }

    #[tokio::test]
    async fn installing_a_new_quiz_drops_the_session() {
        let state = loaded_state(60).await;
        start_game(&state).await.unwrap();

        state
            .install_quiz(Game::new(Some("q2".into()), vec!["static".into()]))
            .await;

        let snapshot = game_snapshot(&state).await;
        assert_eq!(snapshot.phase, VisiblePhase::Idle);
        assert_eq!(snapshot.total, 1);
    }
}
