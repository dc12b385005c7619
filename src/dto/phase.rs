use serde::Serialize;
use utoipa::ToSchema;

use crate::state::session::GameSession;

/// Publicly visible round phase exposed to clients (REST/SSE).
#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisiblePhase {
    /// No session exists for the loaded quiz.
    Idle,
    /// A round is in progress: the clock is armed and guesses count.
    Running,
    /// The round ended (or was never restarted after a reset).
    Finished,
}

impl From<&GameSession> for VisiblePhase {
    fn from(session: &GameSession) -> Self {
        if session.is_running() {
            VisiblePhase::Running
        } else {
            VisiblePhase::Finished
        }
    }
}
