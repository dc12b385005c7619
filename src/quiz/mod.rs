//! Upstream quiz source: wire payload definitions and the HTTP fetcher.

/// Typed fetch failures.
pub mod error;
/// Wire payload decoding.
pub mod payload;
/// HTTP client for the quiz endpoint.
pub mod source;
