//! Torii-Robots main entry point
//!
//! Command-line front end for the robots.txt exclusion engine: checks one
//! or more URLs against their hosts' published rules for a given crawler
//! identity.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use torii_robots::config::{load_config, Config};
use torii_robots::RobotsService;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Torii-Robots: a robots.txt exclusion engine
///
/// Fetches and parses the robots.txt of each URL's host, then reports
/// whether the given crawler identity is allowed to fetch that URL.
/// Hosts that publish no rules (or unusable ones) allow everything.
#[derive(Parser, Debug)]
#[command(name = "torii-robots")]
#[command(version = "1.0.0")]
#[command(about = "Checks URLs against robots.txt exclusion rules", long_about = None)]
struct Cli {
    /// Crawler identity to evaluate (a single user-agent token)
    #[arg(short, long)]
    agent: Option<String>,

    /// Resource URLs to check
    #[arg(value_name = "URL", required = true)]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
        None => Config::default(),
    };

    let agent = cli
        .agent
        .clone()
        .unwrap_or_else(|| config.user_agent.crawler_name.clone());
    tracing::info!("Evaluating {} URL(s) as '{}'", cli.urls.len(), agent);

    let service = RobotsService::new(&config)?;

    let mut any_disallowed = false;
    for raw in &cli.urls {
        let url = Url::parse(raw).with_context(|| format!("Malformed URL: {}", raw))?;
        let allowed = service.is_allowed(&agent, &url).await?;
        if !allowed {
            any_disallowed = true;
        }
        println!("{}: {}", if allowed { "allowed" } else { "disallowed" }, url);
    }

    if any_disallowed {
        std::process::exit(1);
    }
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("torii_robots=info,warn"),
            1 => EnvFilter::new("torii_robots=debug,info"),
            2 => EnvFilter::new("torii_robots=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
