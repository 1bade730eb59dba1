//! Error types for the News API client.

use crate::models::ApiError;
use thiserror::Error;

/// Errors that can occur when calling the News API.
///
/// Nothing here is retried by the client; every failure is returned to the
/// caller as soon as it happens.
#[derive(Debug, Error)]
pub enum NewsApiError {
    /// Request parameters could not be turned into query values.
    #[error("failed to serialize request parameters: {0}")]
    Serialization(#[from] serde_urlencoded::ser::Error),

    /// The request URL or headers could not be assembled.
    #[error("failed to construct request: {0}")]
    RequestConstruction(String),

    /// Network-level failure: DNS, refused connection, TLS, timeout.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was truncated, or was not the JSON the endpoint promises.
    #[error("failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The API understood the request and reported a failure.
    #[error("News API error: {0}")]
    Api(#[from] ApiError),

    /// The parameters were rejected locally; nothing was sent.
    #[error("invalid request parameters: {0}")]
    Configuration(#[from] ValidationError),
}

impl NewsApiError {
    /// `true` when the transport gave up because the deadline passed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, NewsApiError::Transport(e) if e.is_timeout())
    }

    /// The API-reported error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            NewsApiError::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Parameter combinations the API is known to refuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`sources` cannot be combined with `country` or `category` on top-headlines")]
    SourcesWithCountryOrCategory,

    #[error("page size {0} is outside 1..={max}", max = crate::vocab::PAGE_SIZE_MAX)]
    PageSizeOutOfRange(u32),

    #[error("page {0} is invalid; pages start at 1")]
    PageOutOfRange(u32),
}
