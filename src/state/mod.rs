//! Shared application state: the loaded quiz, the active session, and the
//! SSE fan-out hub.

pub mod game;
pub mod session;
mod sse;

use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use crate::config::AppConfig;
use crate::state::game::Game;
use crate::state::session::GameSession;

pub use self::sse::SseHub;

/// Cheaply clonable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Broadcast capacity of the public event stream.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Central application state.
///
/// The quiz slot and the session slot are independent: a quiz can be loaded
/// while no round is running, and a session keeps its own copy of the game
/// it was created from. Lock ordering is session before quiz whenever both
/// are taken.
pub struct AppState {
    config: AppConfig,
    quiz: RwLock<Option<Game>>,
    session: RwLock<Option<GameSession>>,
    events: SseHub,
    degraded: watch::Sender<bool>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a quiz payload has been
    /// fetched and installed.
    pub fn new(config: AppConfig) -> SharedState {
        let (degraded_tx, _rx) = watch::channel(true);
        Arc::new(Self {
            config,
            quiz: RwLock::new(None),
            session: RwLock::new(None),
            events: SseHub::new(EVENT_CHANNEL_CAPACITY),
            degraded: degraded_tx,
        })
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Slot holding the most recently fetched quiz.
    pub fn quiz(&self) -> &RwLock<Option<Game>> {
        &self.quiz
    }

    /// Slot holding the session for the current quiz, if one was started.
    pub fn session(&self) -> &RwLock<Option<GameSession>> {
        &self.session
    }

    /// Broadcast hub used for the public event stream.
    pub fn events(&self) -> &SseHub {
        &self.events
    }

    /// Whether the service currently has no quiz to play.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.quiz.read().await;
        guard.is_none()
    }

    /// Subscribe to degraded mode updates.
    pub fn degraded_watcher(&self) -> watch::Receiver<bool> {
        self.degraded.subscribe()
    }

    /// Install a freshly fetched quiz, dropping any session created for the
    /// previous one, and leave degraded mode.
    pub async fn install_quiz(&self, game: Game) {
        {
            let mut session = self.session.write().await;
            session.take();
            let mut quiz = self.quiz.write().await;
            *quiz = Some(game);
        }
        let _ = self.degraded.send(false);
    }
}
