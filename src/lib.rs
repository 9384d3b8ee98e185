//! Torii-Robots: a robots.txt exclusion engine
//!
//! This crate parses robots.txt documents into a structured form and answers
//! the question a polite crawler has to ask before every fetch: given my
//! user-agent identity and this URL, am I allowed in? Group selection uses
//! agent-token specificity; path resolution is first-match-in-document-order
//! with `*` wildcards and `$` end anchors. Every failure along the way
//! (fetch, encoding, unrecognizable content) degrades to "allowed".

pub mod config;
pub mod domain;
pub mod engine;
pub mod fetch;
pub mod matcher;
pub mod parser;
pub mod service;

use thiserror::Error;

/// Main error type for Torii-Robots operations
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Agent identity must not be empty")]
    EmptyAgent,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while interpreting raw bytes or text as a robots.txt
/// document.
///
/// Per-line problems (missing colon, unknown field) are never errors; the
/// parser skips those silently. These variants cover the two cases where the
/// whole input has to be rejected.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Rejected encoding: {0}")]
    RejectedEncoding(String),

    #[error("Input is not recognizable as a robots.txt document")]
    NotRobots,
}

/// Errors from the robots.txt fetch collaborator
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Torii-Robots operations
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Result type alias for parse operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Directive, Group, PathRule, Robots, RobotsBuilder};
pub use matcher::PathPattern;
pub use service::RobotsService;
