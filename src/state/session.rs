use std::fmt;
use std::time::SystemTime;

use indexmap::IndexSet;
use uuid::Uuid;

use crate::state::game::{Game, GameOutcome, GameState};

/// Callback invoked with the updated score after a fresh correct answer.
pub type ScoreHandler = Box<dyn Fn(usize) + Send + Sync>;
/// Callback invoked with the remaining time (seconds) after each clock tick.
pub type TimeHandler = Box<dyn Fn(u64) + Send + Sync>;
/// Callback invoked with the terminal outcome when a round ends.
pub type FinishHandler = Box<dyn Fn(GameOutcome) + Send + Sync>;

/// Notification hooks a session calls into while a round progresses.
///
/// Handlers are injected at construction so the session stays free of any
/// knowledge about its consumers; emitting is synchronous and must not
/// block.
pub struct SessionHooks {
    on_score: ScoreHandler,
    on_time: TimeHandler,
    on_finish: FinishHandler,
}

impl SessionHooks {
    /// Bundle the three notification handlers.
    pub fn new(on_score: ScoreHandler, on_time: TimeHandler, on_finish: FinishHandler) -> Self {
        Self {
            on_score,
            on_time,
            on_finish,
        }
    }

    /// Hooks that swallow every notification.
    pub fn noop() -> Self {
        Self {
            on_score: Box::new(|_| {}),
            on_time: Box::new(|_| {}),
            on_finish: Box::new(|_| {}),
        }
    }
}

/// One attempt at answering all keywords of a single fetched [`Game`] within
/// a fixed time budget.
///
/// The session is a plain synchronous state machine: it holds no task and
/// performs no I/O. An external driver calls [`GameSession::tick`] once per
/// clock period; request handlers call [`GameSession::check_keyword`]. Both
/// paths are expected to be serialised by the owner (a single lock in this
/// service), which preserves the single-threaded mutation model.
pub struct GameSession {
    id: Uuid,
    created_at: SystemTime,
    game: Game,
    time_budget: u64,
    elapsed: u64,
    correct_answers: IndexSet<String>,
    clock_active: bool,
    clock_epoch: u64,
    hooks: SessionHooks,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("time_budget", &self.time_budget)
            .field("elapsed", &self.elapsed)
            .field("score", &self.correct_answers.len())
            .field("clock_active", &self.clock_active)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Wrap a fetched game into a fresh, not-yet-started session.
    pub fn new(game: Game, time_budget_secs: u64, hooks: SessionHooks) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: SystemTime::now(),
            game,
            time_budget: time_budget_secs,
            elapsed: 0,
            correct_answers: IndexSet::new(),
            clock_active: false,
            clock_epoch: 0,
            hooks,
        }
    }

    /// Stable identifier of this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Creation timestamp for snapshots and debugging.
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Question text of the wrapped game (empty when absent).
    pub fn question(&self) -> &str {
        self.game.question()
    }

    /// Total possible score for the round.
    pub fn total_answers(&self) -> usize {
        self.game.total_answers()
    }

    /// Number of correct answers found so far.
    pub fn score(&self) -> usize {
        self.correct_answers.len()
    }

    /// Correct answers found so far, in the order they were matched.
    pub fn correct_answers(&self) -> &IndexSet<String> {
        &self.correct_answers
    }

    /// Lifecycle state of the wrapped game.
    pub fn game_state(&self) -> GameState {
        self.game.state()
    }

    /// Generation counter bumped on every [`GameSession::start`]; an external
    /// clock driver compares it against the value captured at spawn to detect
    /// that a restart superseded it.
    pub fn clock_epoch(&self) -> u64 {
        self.clock_epoch
    }

    /// Whether a round is in progress: the game was started and the clock is
    /// armed.
    pub fn is_running(&self) -> bool {
        self.game.state() == GameState::Started && self.clock_active
    }

    /// Remaining time in seconds, never negative.
    pub fn time_left(&self) -> u64 {
        self.time_budget.saturating_sub(self.elapsed)
    }

    /// Begin (or restart) the round: progress is reset and the clock armed.
    ///
    /// Starting an already-started session restarts it from scratch.
    pub fn start(&mut self) {
        self.game.set_state(GameState::Started);
        self.elapsed = 0;
        self.correct_answers.clear();
        self.clock_active = true;
        self.clock_epoch += 1;
    }

    /// Advance the session clock by one second.
    ///
    /// Ignored unless the round is running. Reaching the time budget disarms
    /// the clock, reports zero remaining time, and ends the round.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }

        self.elapsed += 1;
        if self.elapsed >= self.time_budget {
            self.clock_active = false;
            (self.hooks.on_time)(0);
            self.end();
        } else {
            (self.hooks.on_time)(self.time_budget - self.elapsed);
        }
    }

    /// Check a submitted word against the expected answers.
    ///
    /// Ignored unless the round is running. Matching is exact and
    /// case-sensitive; a word already matched earlier changes nothing. A
    /// fresh match either completes the round (ending it on the spot) or
    /// reports the updated score.
    pub fn check_keyword(&mut self, word: &str) {
        if !self.is_running() {
            return;
        }

        if self.game.answers().iter().any(|answer| answer.as_str() == word)
            && self.correct_answers.insert(word.to_owned())
        {
            if self.correct_answers.len() == self.game.total_answers() {
                self.end();
            } else {
                (self.hooks.on_score)(self.correct_answers.len());
            }
        }
    }

    /// End the round and report its outcome through the finish hook.
    ///
    /// The outcome is decided before `elapsed` is cleared: a win requires
    /// every answer found while still strictly inside the time budget.
    /// Disarming the clock is idempotent, but every call emits one finish
    /// notification.
    pub fn end(&mut self) {
        self.game.set_state(GameState::Finished);

        let outcome = if self.elapsed < self.time_budget
            && self.correct_answers.len() == self.game.total_answers()
        {
            GameOutcome::Win
        } else {
            GameOutcome::Loss(self.correct_answers.len())
        };

        self.clock_active = false;
        self.elapsed = 0;
        (self.hooks.on_finish)(outcome);
    }

    /// End the round and clear all progress, re-arming nothing: the session
    /// is left ready for a fresh [`GameSession::start`] against the same
    /// game.
    pub fn reset(&mut self) {
        self.end();
        self.correct_answers.clear();
        self.elapsed = 0;
    }
}
