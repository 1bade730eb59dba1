//! Command-line interface definitions for the `awful_newsapi` demo binary.
//!
//! Every subcommand maps its flags one-to-one onto a request parameter set
//! from the library. The API key can come from `--api-key`, the
//! `NEWS_API_KEY` environment variable or a YAML config file.

use awful_newsapi::{
    Category, Country, EverythingParams, Language, SortBy, SourcesParams, TopHeadlinesParams,
};
use clap::{Args, Parser, Subcommand};

/// Query the News API from the command line.
///
/// # Examples
///
/// ```sh
/// # Top US business headlines
/// awful_newsapi headlines --country us --category business
///
/// # Everything mentioning millennials, in English, 100 per page
/// awful_newsapi everything -q +millennials --language en --page-size 100
///
/// # Sources as raw JSON, key read from a config file
/// awful_newsapi -c ~/.config/newsapi.yaml --json sources --language fr
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News API key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Optional path to a YAML config file (api_key, base_url, timeout_secs)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the full response as pretty JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Live top and breaking headlines
    Headlines(HeadlinesArgs),
    /// Search all indexed articles
    Everything(EverythingArgs),
    /// List available news sources
    Sources(SourcesArgs),
}

#[derive(Args, Debug)]
pub struct HeadlinesArgs {
    /// Two-letter country code (e.g. us, gb, de)
    #[arg(long)]
    pub country: Option<Country>,

    /// News category (business, entertainment, general, health, science, sports, technology)
    #[arg(long)]
    pub category: Option<Category>,

    /// Comma-separated source identifiers; cannot be mixed with --country or --category
    #[arg(long, value_delimiter = ',')]
    pub sources: Vec<String>,

    /// Keywords or phrase to search for
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    #[arg(long)]
    pub page_size: Option<u32>,

    #[arg(long)]
    pub page: Option<u32>,
}

impl From<HeadlinesArgs> for TopHeadlinesParams {
    fn from(args: HeadlinesArgs) -> Self {
        TopHeadlinesParams {
            country: args.country,
            category: args.category,
            sources: args.sources,
            keywords: args.query,
            page_size: args.page_size,
            page: args.page,
        }
    }
}

#[derive(Args, Debug)]
pub struct EverythingArgs {
    /// Keywords or phrase to search for
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Comma-separated source identifiers
    #[arg(long, value_delimiter = ',')]
    pub sources: Vec<String>,

    /// Comma-separated domains to restrict the search to
    #[arg(long, value_delimiter = ',')]
    pub domains: Vec<String>,

    /// Comma-separated domains to remove from the results
    #[arg(long, value_delimiter = ',')]
    pub exclude_domains: Vec<String>,

    /// Oldest article date (ISO 8601, e.g. 2025-05-06)
    #[arg(long)]
    pub from: Option<String>,

    /// Newest article date (ISO 8601)
    #[arg(long)]
    pub to: Option<String>,

    #[arg(long)]
    pub language: Option<Language>,

    /// relevancy, popularity or publishedAt
    #[arg(long)]
    pub sort_by: Option<SortBy>,

    #[arg(long)]
    pub page_size: Option<u32>,

    #[arg(long)]
    pub page: Option<u32>,
}

impl From<EverythingArgs> for EverythingParams {
    fn from(args: EverythingArgs) -> Self {
        EverythingParams {
            keywords: args.query,
            sources: args.sources,
            domains: args.domains,
            exclude_domains: args.exclude_domains,
            from: args.from,
            to: args.to,
            language: args.language,
            sort_by: args.sort_by,
            page_size: args.page_size,
            page: args.page,
        }
    }
}

#[derive(Args, Debug)]
pub struct SourcesArgs {
    #[arg(long)]
    pub category: Option<Category>,

    #[arg(long)]
    pub language: Option<Language>,

    #[arg(long)]
    pub country: Option<Country>,
}

impl From<SourcesArgs> for SourcesParams {
    fn from(args: SourcesArgs) -> Self {
        SourcesParams {
            category: args.category,
            language: args.language,
            country: args.country,
        }
    }
}
