use serde::Serialize;
use tracing::warn;

use crate::{
    dto::{
        format_clock,
        sse::{GameFinishedEvent, QuizErrorEvent, ScoreUpdatedEvent, ServerEvent, TimeUpdatedEvent},
    },
    quiz::error::FetchError,
    state::{SseHub, game::GameOutcome},
};

const EVENT_SCORE_UPDATED: &str = "score.updated";
const EVENT_TIME_UPDATED: &str = "time.updated";
const EVENT_GAME_FINISHED: &str = "game.finished";
const EVENT_QUIZ_ERROR: &str = "quiz.error";

/// Broadcast the updated score after a fresh correct answer.
pub fn broadcast_score_updated(hub: &SseHub, score: usize) {
    let payload = ScoreUpdatedEvent { score };
    send_event(hub, EVENT_SCORE_UPDATED, &payload);
}

/// Broadcast the remaining round time, rendered `MM:SS`.
pub fn broadcast_time_updated(hub: &SseHub, remaining_secs: u64) {
    let payload = TimeUpdatedEvent {
        remaining: format_clock(remaining_secs),
    };
    send_event(hub, EVENT_TIME_UPDATED, &payload);
}

/// Broadcast the terminal outcome of a round.
pub fn broadcast_game_finished(hub: &SseHub, outcome: GameOutcome) {
    let payload = match outcome {
        GameOutcome::Win => GameFinishedEvent::Win,
        GameOutcome::Loss(score) => GameFinishedEvent::Loss { score },
    };
    send_event(hub, EVENT_GAME_FINISHED, &payload);
}

/// Forward a quiz fetch failure onto the event stream, verbatim.
pub fn broadcast_quiz_error(hub: &SseHub, error: &FetchError) {
    let payload = QuizErrorEvent {
        message: error.to_string(),
    };
    send_event(hub, EVENT_QUIZ_ERROR, &payload);
}

fn send_event(hub: &SseHub, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => hub.broadcast(event),
        Err(err) => warn!(event, error = %err, "failed to serialize SSE payload"),
    }
}
