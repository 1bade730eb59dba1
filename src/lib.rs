//! # Awful NewsAPI
//!
//! A typed async client for the [News API](https://newsapi.org/docs) v2.
//!
//! ## Features
//!
//! - Three read-only operations: top headlines, full-text article search
//!   ("everything") and source listing
//! - Strongly-typed request parameters with closed vocabularies for
//!   countries, categories, languages and sort orders
//! - API key sent as the `X-Api-Key` header, never in the URL
//! - One round trip per call, bounded by a 10 second deadline; no retries,
//!   no caching
//! - Typed errors that separate transport, decoding and API-reported failures
//!
//! ## Usage
//!
//! ```no_run
//! use awful_newsapi::{EverythingParams, Language, NewsApiClient};
//!
//! # async fn run() -> Result<(), awful_newsapi::NewsApiError> {
//! let client = NewsApiClient::new(std::env::var("NEWS_API_KEY").unwrap_or_default())?;
//! let res = client
//!     .everything(&EverythingParams {
//!         keywords: Some("+millennials".to_string()),
//!         language: Some(Language::English),
//!         page_size: Some(100),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for article in res.articles {
//!     println!("{}", article.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod vocab;

pub use client::{API_KEY_HEADER, ApiRequest, Endpoint, NewsApiClient};
pub use config::{ClientConfig, ConfigError};
pub use error::{NewsApiError, ValidationError};
pub use models::{
    ApiError, Article, ArticleSource, EverythingParams, NewsResponse, Source, SourcesParams,
    SourcesResponse, TopHeadlinesParams,
};
pub use vocab::{Category, Country, Language, PAGE_SIZE_MAX, SortBy, UnknownVariant};
