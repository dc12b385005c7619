use serde::Serialize;
use utoipa::ToSchema;

/// Dispatched payload carried across the SSE channel.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    /// Optional SSE event name.
    pub event: Option<String>,
    /// Serialised data field.
    pub data: String,
}

impl ServerEvent {
    /// Build a raw event from an already-rendered data string.
    pub fn new(event: Option<String>, data: String) -> Self {
        Self { event, data }
    }

    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// Initial metadata sent to an SSE client when it connects.
pub struct Handshake {
    /// Human-readable message confirming the subscription.
    pub message: String,
    /// Whether the backend is running without a loaded quiz.
    pub degraded: bool,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast whenever a fresh correct answer is matched mid-round.
pub struct ScoreUpdatedEvent {
    /// Number of correct answers found so far.
    pub score: usize,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast on every clock tick with the remaining time.
pub struct TimeUpdatedEvent {
    /// Remaining time rendered as a two-digit `MM:SS` clock label.
    pub remaining: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
/// Broadcast exactly once per round end with the terminal outcome.
pub enum GameFinishedEvent {
    /// Every answer was found within the time budget.
    Win,
    /// The round ended short of the full answer set.
    Loss {
        /// Number of correct answers found.
        score: usize,
    },
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when fetching the quiz payload failed, carrying the failure
/// message verbatim.
pub struct QuizErrorEvent {
    /// Human-readable fetch failure.
    pub message: String,
}
