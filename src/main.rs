// src/main.rs
// =============================================================================
// Entry point of the CLI.
//
// What happens here:
// 1. Parse command-line arguments with clap
// 2. Install the tracing subscriber (diagnostics go to stderr)
// 3. Build a SpiderConfig, run the crawl, optionally persist the results
// 4. Print a summary table (or the full JSON with --json) and exit
//
// Exit codes: 0 = crawl completed, 1 = configuration or persistence error.
// =============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;
use tracing_subscriber::EnvFilter;

use spiderling::cli::Cli;
use spiderling::{CrawlResult, Spider, SpiderConfig};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = SpiderConfig::new(&cli.root_url)
        .with_max_visits(cli.max_visits)
        .with_capture_body(cli.include_body)
        .with_internal_only(cli.internal_only)
        .with_external_only(cli.external_only);

    if let Some(pattern) = &cli.url_regex {
        let filter = Regex::new(pattern)
            .with_context(|| format!("invalid --url-regex pattern '{pattern}'"))?;
        config = config.with_link_filter(filter);
    }
    if let Some(path) = &cli.save {
        config = config.with_save_destination(path);
    }

    println!("🕷️  Crawling: {}", cli.root_url);

    let mut spider = Spider::new(config)?;
    spider.start().await?;

    let result = spider.result();
    println!("📄 Crawled {} page(s)", result.len());

    if cli.json {
        println!("{}", result.to_json()?);
    } else {
        print_summary(result);
    }

    if let Some(path) = &cli.save {
        println!("💾 Results saved to {}", path.display());
    }

    Ok(())
}

// Diagnostics go to stderr so --json output on stdout stays clean.
// RUST_LOG still wins when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "spiderling=debug"
    } else {
        "spiderling=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Prints one row per crawled page: the URL and how many links it yielded.
fn print_summary(result: &CrawlResult) {
    println!("{:<70} {:<8}", "URL", "LINKS");
    println!("{}", "=".repeat(78));

    for (url, record) in result.iter() {
        println!("{:<70} {:<8}", truncate_url(url, 67), record.urls.len());
    }
}

// Truncates long URLs for the table. Counts chars, not bytes: slicing at a
// fixed byte index panics when a multibyte character straddles it.
fn truncate_url(url: &str, max_chars: usize) -> String {
    if url.chars().count() > max_chars {
        let truncated: String = url.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        url.to_string()
    }
}
