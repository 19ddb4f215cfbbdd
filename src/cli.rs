// src/cli.rs
// =============================================================================
// Command-line surface, built with clap's derive API.
//
// One invocation = one crawl run. Every constructor knob of SpiderConfig is
// exposed as a flag; conflicting scope flags are rejected by the library at
// construction time, not here, so the CLI and programmatic paths behave the
// same.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "spiderling",
    version,
    about = "A tiny single-site web crawler",
    long_about = "spiderling fetches a root URL, extracts its links, and recursively visits \
                  newly discovered pages up to a configurable limit, recording the links \
                  (and optionally the body) found on each page."
)]
pub struct Cli {
    /// Root URL to start crawling from (e.g., https://example.com)
    pub root_url: String,

    /// Maximum number of distinct URLs to visit (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    pub max_visits: usize,

    /// Write the crawl result as JSON to this file when the run completes
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Record each page's raw HTML body in its result entry
    #[arg(long)]
    pub include_body: bool,

    /// Only follow links on the same host as the root URL
    #[arg(long)]
    pub internal_only: bool,

    /// Only follow links on hosts other than the root URL's
    #[arg(long)]
    pub external_only: bool,

    /// Only accept links whose full URL matches this regular expression
    #[arg(long, value_name = "PATTERN")]
    pub url_regex: Option<String>,

    /// Print the crawl result as JSON to stdout instead of a summary table
    #[arg(long)]
    pub json: bool,

    /// Enable per-link diagnostic output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["spiderling", "http://example.com"]);
        assert_eq!(cli.root_url, "http://example.com");
        assert_eq!(cli.max_visits, 0);
        assert!(cli.save.is_none());
        assert!(!cli.include_body);
        assert!(!cli.internal_only && !cli.external_only);
    }

    #[test]
    fn test_all_flags_parse() {
        let cli = Cli::parse_from([
            "spiderling",
            "http://example.com",
            "--max-visits",
            "25",
            "--save",
            "out.json",
            "--include-body",
            "--internal-only",
            "--url-regex",
            "example",
            "--json",
            "--verbose",
        ]);
        assert_eq!(cli.max_visits, 25);
        assert_eq!(cli.save.as_deref().unwrap().to_str(), Some("out.json"));
        assert!(cli.include_body && cli.internal_only && cli.json && cli.verbose);
        assert_eq!(cli.url_regex.as_deref(), Some("example"));
    }
}
