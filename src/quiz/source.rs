use reqwest::{Client, Url};

use super::error::{FetchError, FetchResult};
use super::payload::QuizPayload;

/// HTTP client for the remote quiz endpoint.
///
/// One unauthenticated GET returns the question and its expected answers;
/// every failure maps to a [`FetchError`] variant and ends the attempt.
#[derive(Clone, Debug)]
pub struct QuizSource {
    client: Client,
    url: Url,
}

impl QuizSource {
    /// Build a source for the given endpoint, rejecting unparsable URLs up
    /// front.
    pub fn new(url: &str) -> FetchResult<Self> {
        let url = Url::parse(url).map_err(|_| FetchError::InvalidUrl {
            url: url.to_owned(),
        })?;

        Ok(Self {
            client: Client::new(),
            url,
        })
    }

    /// Fetch and decode the quiz payload.
    pub async fn fetch_quiz(&self) -> FetchResult<QuizPayload> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| FetchError::NoResponse { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::InvalidStatusCode { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::NoResponse { source })?;

        if body.is_empty() {
            return Err(FetchError::NoData);
        }

        serde_json::from_slice(&body).map_err(|source| FetchError::Parse { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_rejected_up_front() {
        let err = QuizSource::new("").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn relative_url_is_rejected_up_front() {
        let err = QuizSource::new("quiz/1").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { url } if url == "quiz/1"));
    }

    #[test]
    fn absolute_url_is_accepted() {
        assert!(QuizSource::new("https://example.com/quiz/1").is_ok());
    }
}
