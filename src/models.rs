//! Request parameters and response shapes for the News API.
//!
//! This module defines the data that crosses the wire:
//! - Request parameter sets, one per endpoint: [`TopHeadlinesParams`],
//!   [`EverythingParams`], [`SourcesParams`]
//! - Success shapes: [`NewsResponse`] (with [`Article`]) and
//!   [`SourcesResponse`] (with [`Source`])
//! - The error shape [`ApiError`], which is also surfaced to callers
//!
//! Parameter field names are snake_case in Rust and renamed to the API's
//! query keys through serde attributes. Every field is optional; absent or
//! blank fields never reach the query string.

use crate::error::ValidationError;
use crate::query::{comma_joined, is_blank, is_empty_list};
use crate::vocab::{Category, Country, Language, PAGE_SIZE_MAX, SortBy};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Parameters for the `/v2/top-headlines` endpoint.
///
/// The API refuses `country` or `category` combined with `sources`;
/// [`validate`](Self::validate) rejects that combination before any request
/// is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopHeadlinesParams {
    /// Country the headlines are published in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    /// Topic the headlines belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Source identifiers, e.g. `bbc-news`.
    #[serde(serialize_with = "comma_joined", skip_serializing_if = "is_empty_list")]
    pub sources: Vec<String>,
    /// Keywords or phrase to search for.
    #[serde(rename = "q", skip_serializing_if = "is_blank")]
    pub keywords: Option<String>,
    /// Results per page, `1..=100`. The API defaults to 20.
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl TopHeadlinesParams {
    /// Check the parameter combination against the API's rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_empty_list(&self.sources) && (self.country.is_some() || self.category.is_some()) {
            return Err(ValidationError::SourcesWithCountryOrCategory);
        }
        check_paging(self.page_size, self.page)
    }
}

/// Parameters for the `/v2/everything` endpoint.
///
/// `from` and `to` take ISO-8601 dates (`2025-05-06`) or date-times
/// (`2025-05-06T14:30:00Z`); [`with_date_range`](Self::with_date_range) and
/// [`with_since`](Self::with_since) render them from `chrono` values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EverythingParams {
    /// Keywords or phrase to search for. Supports `+must`, `-mustnot`, quotes
    /// and boolean operators.
    #[serde(rename = "q", skip_serializing_if = "is_blank")]
    pub keywords: Option<String>,
    /// Source identifiers, at most 20 of them.
    #[serde(serialize_with = "comma_joined", skip_serializing_if = "is_empty_list")]
    pub sources: Vec<String>,
    /// Domains to restrict the search to, e.g. `bbc.co.uk`.
    #[serde(serialize_with = "comma_joined", skip_serializing_if = "is_empty_list")]
    pub domains: Vec<String>,
    /// Domains to remove from the results.
    #[serde(
        rename = "excludeDomains",
        serialize_with = "comma_joined",
        skip_serializing_if = "is_empty_list"
    )]
    pub exclude_domains: Vec<String>,
    /// Oldest publication date or date-time to include.
    #[serde(skip_serializing_if = "is_blank")]
    pub from: Option<String>,
    /// Newest publication date or date-time to include.
    #[serde(skip_serializing_if = "is_blank")]
    pub to: Option<String>,
    /// Language the articles are written in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Result order. The API defaults to `publishedAt`.
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    /// Results per page, `1..=100`. The API defaults to 20.
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl EverythingParams {
    /// Restrict results to articles published between two calendar dates (inclusive).
    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from.format("%Y-%m-%d").to_string());
        self.to = Some(to.format("%Y-%m-%d").to_string());
        self
    }

    /// Restrict results to articles published at or after `at`.
    pub fn with_since(mut self, at: DateTime<Utc>) -> Self {
        self.from = Some(at.to_rfc3339_opts(SecondsFormat::Secs, true));
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_paging(self.page_size, self.page)
    }
}

/// Parameters for the `/v2/sources` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourcesParams {
    /// Only publishers covering this topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Only publishers writing in this language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Only publishers based in this country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

fn check_paging(page_size: Option<u32>, page: Option<u32>) -> Result<(), ValidationError> {
    if let Some(size) = page_size {
        if size == 0 || size > PAGE_SIZE_MAX {
            return Err(ValidationError::PageSizeOutOfRange(size));
        }
    }
    if page == Some(0) {
        return Err(ValidationError::PageOutOfRange(0));
    }
    Ok(())
}

/// Response of the `/v2/top-headlines` and `/v2/everything` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    /// `"ok"` on success.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Total number of matches; only `articles.len()` of them are in this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: u64,
    /// This page of results.
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
}

/// Response of the `/v2/sources` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesResponse {
    /// `"ok"` on success.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Every publisher matching the filters; this endpoint is not paged.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<Source>,
}

/// Error body returned by the API, e.g.
/// `{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("[{code}] {message}")]
pub struct ApiError {
    /// Always `"error"` when sent by the API.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Machine-readable code such as `apiKeyInvalid` or `rateLimited`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Human-readable explanation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl ApiError {
    /// The key has made too many requests recently.
    pub fn is_rate_limited(&self) -> bool {
        self.code == "rateLimited"
    }

    /// The request was refused because of the API key itself.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.code.as_str(),
            "apiKeyDisabled" | "apiKeyExhausted" | "apiKeyInvalid" | "apiKeyMissing"
        )
    }
}

/// A news item returned by `top-headlines` and `everything`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Outlet that published the article.
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub author: Option<String>,
    /// Headline.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Snippet or summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the full article.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Lead image, when the outlet provides one.
    #[serde(default)]
    pub url_to_image: Option<String>,
    /// Publication time as sent by the API (RFC 3339, UTC).
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
    /// Truncated article body.
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    /// Parse [`published_at`](Self::published_at) into a UTC timestamp.
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// The outlet an [`Article`] came from. `id` is null for outlets the API
/// does not list under `/v2/sources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Identifier usable in `sources` filters.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A publisher returned by `/v2/sources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Identifier, e.g. `abc-news`; pass it in `sources` filters.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// What the outlet covers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Homepage.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Category wire value, see [`category_kind`](Self::category_kind).
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Language wire value, see [`language_kind`](Self::language_kind).
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    /// Country wire value, see [`country_kind`](Self::country_kind).
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
}

impl Source {
    pub fn category_kind(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    pub fn language_kind(&self) -> Option<Language> {
        self.language.parse().ok()
    }

    pub fn country_kind(&self) -> Option<Country> {
        self.country.parse().ok()
    }
}

/// Decode an explicit JSON `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
