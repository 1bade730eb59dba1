//! # awful_newsapi
//!
//! Demonstration CLI for the `awful_newsapi` library: runs one News API
//! query and prints the result.
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... awful_newsapi everything -q +millennials --language en --page-size 100
//! ```

use awful_newsapi::{
    ClientConfig, EverythingParams, NewsApiClient, NewsResponse, SourcesParams, SourcesResponse,
    TopHeadlinesParams,
};
use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    debug!(config = ?args.config, command = ?args.command, "Parsed CLI arguments");

    let config = resolve_config(&args)?;
    let client = NewsApiClient::from_config(&config)?;
    info!(base_url = %client.base_url(), "Client ready");

    match args.command {
        Command::Headlines(cmd) => {
            let res = client.top_headlines(&TopHeadlinesParams::from(cmd)).await?;
            print_news(&res, args.json)?;
        }
        Command::Everything(cmd) => {
            let res = client.everything(&EverythingParams::from(cmd)).await?;
            print_news(&res, args.json)?;
        }
        Command::Sources(cmd) => {
            let res = client.sources(&SourcesParams::from(cmd)).await?;
            print_sources(&res, args.json)?;
        }
    }

    Ok(())
}

/// Config file first, then `--api-key` / `NEWS_API_KEY` on top of it.
fn resolve_config(args: &Cli) -> Result<ClientConfig, Box<dyn Error>> {
    let config = match (&args.config, &args.api_key) {
        (Some(path), key) => {
            let mut config = ClientConfig::load(path)?;
            if let Some(key) = key {
                config.api_key = key.clone();
            }
            config
        }
        (None, Some(key)) => ClientConfig::new(key.clone()),
        (None, None) => ClientConfig::from_env()?,
    };
    Ok(config.validate()?)
}

fn print_news(res: &NewsResponse, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(res)?);
        return Ok(());
    }

    info!(
        total_results = res.total_results,
        count = res.articles.len(),
        "Fetched articles"
    );
    for article in &res.articles {
        println!("{}", article.title);
        if let Some(description) = &article.description {
            println!("{description}");
        }
        println!();
    }
    Ok(())
}

fn print_sources(res: &SourcesResponse, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(res)?);
        return Ok(());
    }

    info!(count = res.sources.len(), "Fetched sources");
    for source in &res.sources {
        println!("{:<28} {} ({}, {})", source.id, source.name, source.country, source.language);
    }
    Ok(())
}
