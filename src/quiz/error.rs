use reqwest::StatusCode;
use thiserror::Error;

/// Convenience alias for fetch results.
pub type FetchResult<T> = Result<T, FetchError>;

/// Failures that can occur while fetching the quiz payload.
///
/// Each variant is terminal for the attempt: the service never retries on
/// its own, a fresh fetch only happens on an explicit reload request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured quiz source URL does not parse.
    #[error("invalid quiz source url `{url}`")]
    InvalidUrl {
        /// The offending URL string.
        url: String,
    },
    /// The quiz source answered outside the 2xx range.
    #[error("quiz source replied with status {status}")]
    InvalidStatusCode {
        /// HTTP status returned by the upstream.
        status: StatusCode,
    },
    /// No response came back at all (connection or transport failure).
    #[error("no response from quiz source")]
    NoResponse {
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The upstream replied successfully but with an empty body.
    #[error("quiz source returned no data")]
    NoData,
    /// The body could not be decoded into a quiz payload.
    #[error("could not parse quiz payload")]
    Parse {
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}
