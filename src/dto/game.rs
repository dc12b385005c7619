use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::{format_clock, format_system_time, phase::VisiblePhase, validation::validate_guess_word},
    state::{game::Game, session::GameSession},
};

/// Body of a guess submission.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GuessRequest {
    /// The word to check against the expected answers, matched exactly and
    /// case-sensitively.
    pub word: String,
}

impl Validate for GuessRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_guess_word(&self.word) {
            errors.add("word", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Synchronous projection of the game state returned by every game route.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameSnapshot {
    /// Current round phase.
    pub phase: VisiblePhase,
    /// Question text, empty when no quiz is loaded.
    pub question: String,
    /// Correct answers found so far.
    pub score: usize,
    /// Total possible score.
    pub total: usize,
    /// Remaining time rendered as a two-digit `MM:SS` clock label.
    pub time_left: String,
    /// Correct answers found so far, in the order they were matched.
    pub found: Vec<String>,
    /// Identifier of the session, absent while idle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    /// Session creation timestamp (RFC 3339), absent while idle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl GameSnapshot {
    /// Snapshot for the idle phase: no session exists yet, only the loaded
    /// quiz (if any) and the configured budget are visible.
    pub fn idle(quiz: Option<&Game>, time_budget_secs: u64) -> Self {
        Self {
            phase: VisiblePhase::Idle,
            question: quiz.map(Game::question).unwrap_or_default().to_owned(),
            score: 0,
            total: quiz.map(Game::total_answers).unwrap_or_default(),
            time_left: format_clock(time_budget_secs),
            found: Vec::new(),
            session_id: None,
            created_at: None,
        }
    }
}

impl From<&GameSession> for GameSnapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            phase: session.into(),
            question: session.question().to_owned(),
            score: session.score(),
            total: session.total_answers(),
            time_left: format_clock(session.time_left()),
            found: session.correct_answers().iter().cloned().collect(),
            session_id: Some(session.id()),
            created_at: Some(format_system_time(session.created_at())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::SessionHooks;

    #[test]
    fn snapshot_of_a_running_session() {
        let game = Game::new(Some("q".into()), vec!["abstract".into(), "public".into()]);
        let mut session = GameSession::new(game, 300, SessionHooks::noop());
        session.start();
        session.check_keyword("abstract");

        let snapshot = GameSnapshot::from(&session);
        assert_eq!(snapshot.phase, VisiblePhase::Running);
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.total, 2);
        assert_eq!(snapshot.time_left, "05:00");
        assert_eq!(snapshot.found, vec!["abstract".to_string()]);
        assert!(snapshot.session_id.is_some());
    }

    #[test]
    fn idle_snapshot_exposes_the_loaded_quiz() {
        let game = Game::new(Some("q".into()), vec!["for".into()]);
        let snapshot = GameSnapshot::idle(Some(&game), 300);
        assert_eq!(snapshot.phase, VisiblePhase::Idle);
        assert_eq!(snapshot.question, "q");
        assert_eq!(snapshot.total, 1);
        assert!(snapshot.found.is_empty());
        assert!(snapshot.session_id.is_none());
    }

    #[test]
    fn guess_request_rejects_empty_words() {
        let request = GuessRequest { word: String::new() };
        assert!(request.validate().is_err());

        let request = GuessRequest {
            word: "abstract".into(),
        };
        assert!(request.validate().is_ok());
    }
}
