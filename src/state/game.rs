use crate::quiz::payload::QuizPayload;

/// Lifecycle state of a [`Game`].
///
/// A freshly decoded game starts out `Finished`; only a session explicitly
/// starting a round moves it to `Started`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// A round is in progress for this game.
    Started,
    /// No round is in progress (initial state, or the round ended).
    Finished,
}

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every answer was found within the time budget.
    Win,
    /// The round ended short; carries the number of correct answers found.
    Loss(usize),
}

/// Runtime representation of one fetched quiz: the question, the complete
/// keyword set for the round, and the round lifecycle state.
#[derive(Debug, Clone)]
pub struct Game {
    question: Option<String>,
    answers: Vec<String>,
    state: GameState,
}

impl Game {
    /// Build a game directly from its parts. Rounds start out `Finished`.
    pub fn new(question: Option<String>, answers: Vec<String>) -> Self {
        Self {
            question,
            answers,
            state: GameState::Finished,
        }
    }

    /// Display text of the question, empty when the payload carried none.
    pub fn question(&self) -> &str {
        self.question.as_deref().unwrap_or("")
    }

    /// Complete expected keyword sequence, in payload order. Duplicates in
    /// the source data are kept as-is.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Total possible score for this game: the length of the answer
    /// sequence.
    pub fn total_answers(&self) -> usize {
        self.answers.len()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}

impl From<QuizPayload> for Game {
    fn from(payload: QuizPayload) -> Self {
        Self::new(payload.question, payload.answers.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_finished() {
        let game = Game::new(Some("java keywords".into()), vec!["abstract".into()]);
        assert_eq!(game.state(), GameState::Finished);
    }

    #[test]
    fn question_falls_back_to_empty_string() {
        let game = Game::new(None, Vec::new());
        assert_eq!(game.question(), "");
    }

    #[test]
    fn total_counts_the_sequence_including_duplicates() {
        let game = Game::new(None, vec!["public".into(), "public".into()]);
        assert_eq!(game.total_answers(), 2);
    }

    #[test]
    fn payload_without_answers_yields_empty_sequence() {
        let payload = QuizPayload {
            question: Some("anything".into()),
            answers: None,
        };
        let game = Game::from(payload);
        assert_eq!(game.total_answers(), 0);
        assert_eq!(game.question(), "anything");
    }
}
