use serde::Serialize;
use utoipa::ToSchema;

use crate::state::game::Game;

/// Summary returned once a quiz payload has been fetched and installed.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizSummary {
    /// Question text, empty when the payload carried none.
    pub question: String,
    /// Number of expected answers (total possible score).
    pub total_answers: usize,
}

impl From<&Game> for QuizSummary {
    fn from(game: &Game) -> Self {
        Self {
            question: game.question().to_owned(),
            total_answers: game.total_answers(),
        }
    }
}
