//! HTTP client for the News API.
//!
//! Every call is one authenticated `GET`:
//!
//! 1. **Build**: validate the parameters, encode them as a query string and
//!    attach the key as an `X-Api-Key` header (never in the URL)
//! 2. **Send**: a single round trip bounded by the client timeout; no retries
//! 3. **Decode**: read the body as JSON and resolve it to the endpoint's
//!    success shape or an [`ApiError`]
//!
//! # Resolving success and error bodies
//!
//! The API answers with one JSON object whose `status` field is `"ok"` or
//! `"error"`. That field decides which shape the body is decoded into. If a
//! body has no `status`, a non-empty `code` marks it as an error. The HTTP
//! status code is logged but does not affect the outcome.

use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{NewsApiError, ValidationError};
use crate::models::{
    ApiError, EverythingParams, NewsResponse, SourcesParams, SourcesResponse, TopHeadlinesParams,
};
use crate::query;
use reqwest::{Client, Request, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// One of the fixed API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Everything,
    TopHeadlines,
    Sources,
}

impl Endpoint {
    /// Path segment appended to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Everything => "everything",
            Endpoint::TopHeadlines => "top-headlines",
            Endpoint::Sources => "sources",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A parameter set that knows which endpoint it targets and what it returns.
///
/// Implemented by [`TopHeadlinesParams`], [`EverythingParams`] and
/// [`SourcesParams`]; [`NewsApiClient::execute`] works with any of them.
pub trait ApiRequest: Serialize {
    /// Success shape of the endpoint.
    type Response: DeserializeOwned;

    const ENDPOINT: Endpoint;

    /// Reject parameter combinations the API would refuse.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl ApiRequest for TopHeadlinesParams {
    type Response = NewsResponse;
    const ENDPOINT: Endpoint = Endpoint::TopHeadlines;

    fn validate(&self) -> Result<(), ValidationError> {
        TopHeadlinesParams::validate(self)
    }
}

impl ApiRequest for EverythingParams {
    type Response = NewsResponse;
    const ENDPOINT: Endpoint = Endpoint::Everything;

    fn validate(&self) -> Result<(), ValidationError> {
        EverythingParams::validate(self)
    }
}

impl ApiRequest for SourcesParams {
    type Response = SourcesResponse;
    const ENDPOINT: Endpoint = Endpoint::Sources;
}

/// Client for the News API.
///
/// Cheap to clone and safe to share across tasks: it holds only the API key,
/// the base URL and a pooled [`reqwest::Client`].
#[derive(Clone)]
pub struct NewsApiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl NewsApiClient {
    /// Create a client for the production API with the default 10 second timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, NewsApiError> {
        let http_client = build_http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?;
        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client from a loaded [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, NewsApiError> {
        let http_client = build_http_client(config.timeout())?;
        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Point the client at another API root (useful for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a caller-supplied transport. Its own timeout settings apply.
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Live top and breaking headlines.
    pub async fn top_headlines(
        &self,
        params: &TopHeadlinesParams,
    ) -> Result<NewsResponse, NewsApiError> {
        self.execute(params).await
    }

    /// Search every article the API has indexed.
    pub async fn everything(&self, params: &EverythingParams) -> Result<NewsResponse, NewsApiError> {
        self.execute(params).await
    }

    /// List the publishers available to `top-headlines`.
    pub async fn sources(&self, params: &SourcesParams) -> Result<SourcesResponse, NewsApiError> {
        self.execute(params).await
    }

    /// Send any [`ApiRequest`] and decode its response.
    #[instrument(level = "info", skip_all, fields(endpoint = %R::ENDPOINT))]
    pub async fn execute<R: ApiRequest>(&self, params: &R) -> Result<R::Response, NewsApiError> {
        let t0 = Instant::now();
        let request = self.build_request(params)?;
        let result = self.send_and_decode::<R::Response>(request).await;
        let elapsed_ms = t0.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => info!(elapsed_ms, "News API call succeeded"),
            Err(NewsApiError::Api(e)) => {
                warn!(elapsed_ms, code = %e.code, message = %e.message, "News API reported an error")
            }
            Err(e) => error!(elapsed_ms, error = %e, "News API call failed"),
        }
        result
    }

    /// Build the `GET` request for `params` without sending it.
    ///
    /// # Errors
    ///
    /// - [`NewsApiError::Configuration`] if the parameters fail validation
    /// - [`NewsApiError::Serialization`] if they cannot be query-encoded
    /// - [`NewsApiError::RequestConstruction`] if the URL or the key header is malformed
    pub fn build_request<R: ApiRequest>(&self, params: &R) -> Result<Request, NewsApiError> {
        params.validate()?;

        let url = self.endpoint_url(R::ENDPOINT, &query::encode(params)?)?;
        debug!(%url, "Built News API request");

        self.http_client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .build()
            .map_err(|e| NewsApiError::RequestConstruction(e.to_string()))
    }

    fn endpoint_url(&self, endpoint: Endpoint, query: &str) -> Result<Url, NewsApiError> {
        let mut raw = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.path());
        if !query.is_empty() {
            raw.push('?');
            raw.push_str(query);
        }
        Url::parse(&raw)
            .map_err(|e| NewsApiError::RequestConstruction(format!("invalid URL {raw:?}: {e}")))
    }

    async fn send_and_decode<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<T, NewsApiError> {
        let response = self.http_client.execute(request).await.map_err(|e| {
            if e.is_timeout() {
                error!("Request timed out");
            } else {
                error!(error = %e, "Network error during News API request");
            }
            NewsApiError::Transport(e)
        })?;

        let status = response.status();
        debug!(status = %status, "Received response from News API");

        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            if !e.is_timeout() && (e.is_body() || e.is_decode()) {
                NewsApiError::Decode {
                    status: status.as_u16(),
                    source: e.into(),
                }
            } else {
                NewsApiError::Transport(e)
            }
        })?;

        decode_body(status.as_u16(), &body)
    }
}

fn build_http_client(timeout: Duration) -> Result<Client, NewsApiError> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| {
            NewsApiError::RequestConstruction(format!("failed to build HTTP client: {e}"))
        })
}

/// Resolve a response body into the success shape `T` or an [`ApiError`].
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, NewsApiError> {
    let decode_err = |source: serde_json::Error| {
        error!(status, error = %source, "Failed to parse News API response");
        NewsApiError::Decode {
            status,
            source: source.into(),
        }
    };

    let value: Value = serde_json::from_str(body).map_err(decode_err)?;

    if is_error_body(&value) {
        let api_error: ApiError = serde_json::from_value(value).map_err(decode_err)?;
        return Err(NewsApiError::Api(api_error));
    }

    serde_json::from_value(value).map_err(decode_err)
}

fn is_error_body(value: &Value) -> bool {
    match value.get("status").and_then(Value::as_str) {
        Some(status) => status == "error",
        None => value
            .get("code")
            .and_then(Value::as_str)
            .is_some_and(|code| !code.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{Category, Country, Language, SortBy};

    fn client() -> NewsApiClient {
        NewsApiClient::new("test-api-key").unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.api_key, "test-api-key");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url() {
        let client = client().with_base_url("http://localhost:1234/v2");
        assert_eq!(client.base_url(), "http://localhost:1234/v2");
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            api_key: "cfg-key".to_string(),
            base_url: "http://localhost:1234/".to_string(),
            timeout_secs: 2,
        };
        let client = NewsApiClient::from_config(&config).unwrap();
        assert_eq!(client.api_key, "cfg-key");
        assert_eq!(client.base_url(), "http://localhost:1234/");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let printed = format!("{:?}", client());
        assert!(!printed.contains("test-api-key"));
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Everything.path(), "everything");
        assert_eq!(Endpoint::TopHeadlines.path(), "top-headlines");
        assert_eq!(Endpoint::Sources.to_string(), "sources");
    }

    #[test]
    fn test_build_request_without_params_has_no_query() {
        let request = client().build_request(&SourcesParams::default()).unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "https://newsapi.org/v2/sources");
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_build_request_url_and_header() {
        let params = TopHeadlinesParams {
            country: Some(Country::UnitedStates),
            category: Some(Category::Technology),
            page_size: Some(10),
            ..Default::default()
        };
        let request = client().build_request(&params).unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://newsapi.org/v2/top-headlines?country=us&category=technology&pageSize=10"
        );
        assert_eq!(
            request.headers().get(API_KEY_HEADER).unwrap(),
            "test-api-key"
        );
    }

    #[test]
    fn test_api_key_never_in_url() {
        let params = EverythingParams {
            keywords: Some("bitcoin".to_string()),
            sources: vec!["bbc-news".to_string(), "cnn".to_string()],
            language: Some(Language::English),
            sort_by: Some(SortBy::Popularity),
            ..Default::default()
        };
        let request = client().build_request(&params).unwrap();

        assert!(!request.url().as_str().contains("test-api-key"));
        assert!(request.url().query_pairs().all(|(k, v)| {
            !k.to_lowercase().contains("key") && v != "test-api-key"
        }));
        let carrying_key: Vec<_> = request
            .headers()
            .iter()
            .filter(|(_, v)| *v == "test-api-key")
            .map(|(k, _)| k.as_str().to_string())
            .collect();
        assert_eq!(carrying_key, vec!["x-api-key".to_string()]);
    }

    #[test]
    fn test_build_request_comma_joins_lists() {
        let params = EverythingParams {
            sources: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ..Default::default()
        };
        let request = client().build_request(&params).unwrap();
        let pairs: Vec<(String, String)> = request.url().query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("sources".to_string(), "a,b,c".to_string())]);
    }

    #[test]
    fn test_build_request_rejects_invalid_params() {
        let params = TopHeadlinesParams {
            country: Some(Country::Canada),
            sources: vec!["cbc-news".to_string()],
            ..Default::default()
        };
        let err = client().build_request(&params).unwrap_err();
        assert!(matches!(
            err,
            NewsApiError::Configuration(ValidationError::SourcesWithCountryOrCategory)
        ));
    }

    #[test]
    fn test_build_request_rejects_malformed_base_url() {
        let client = client().with_base_url("not a url");
        let err = client.build_request(&SourcesParams::default()).unwrap_err();
        assert!(matches!(err, NewsApiError::RequestConstruction(_)));
    }

    #[test]
    fn test_build_request_rejects_bad_header_value() {
        let client = NewsApiClient::new("bad\nkey").unwrap();
        let err = client.build_request(&SourcesParams::default()).unwrap_err();
        assert!(matches!(err, NewsApiError::RequestConstruction(_)));
    }

    #[test]
    fn test_decode_success_body() {
        let body = r#"{"status":"ok","totalResults":1,"articles":[{"title":"T","description":"D"}]}"#;
        let response: NewsResponse = decode_body(200, body).unwrap();
        assert_eq!(response.total_results, 1);
        assert_eq!(response.articles[0].title, "T");
        assert_eq!(response.articles[0].description.as_deref(), Some("D"));
    }

    #[test]
    fn test_decode_error_body() {
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        let err = decode_body::<NewsResponse>(401, body).unwrap_err();
        let api_error = err.api_error().unwrap();
        assert_eq!(api_error.code, "apiKeyInvalid");
        assert_eq!(api_error.message, "Your API key is invalid.");
    }

    #[test]
    fn test_decode_error_body_without_status() {
        let body = r#"{"code":"rateLimited","message":"Too many requests."}"#;
        let err = decode_body::<SourcesResponse>(429, body).unwrap_err();
        assert!(err.api_error().unwrap().is_rate_limited());
    }

    #[test]
    fn test_decode_ok_status_wins_over_stray_code() {
        let body = r#"{"status":"ok","code":"","sources":[]}"#;
        let response: SourcesResponse = decode_body(200, body).unwrap();
        assert!(response.sources.is_empty());
    }

    #[test]
    fn test_decode_malformed_bodies() {
        for body in ["<html>Bad Gateway</html>", r#"{"status":"ok","articles":[{"#, ""] {
            let err = decode_body::<NewsResponse>(200, body).unwrap_err();
            assert!(matches!(err, NewsApiError::Decode { status: 200, .. }), "{body}");
        }

        // valid JSON, wrong shape
        let err = decode_body::<NewsResponse>(200, r#"{"status":"ok","articles":"none"}"#).unwrap_err();
        assert!(matches!(err, NewsApiError::Decode { .. }));
    }
}
