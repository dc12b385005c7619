/// OpenAPI documentation generation.
pub mod documentation;
/// Core round orchestration: start, guess, reset, snapshot, session clock.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Quiz payload loading and installation.
pub mod quiz_service;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
