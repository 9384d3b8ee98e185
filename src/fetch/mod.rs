//! Robots.txt retrieval
//!
//! This module covers everything between a resource URL and the raw bytes
//! of its host's robots.txt: resolving the well-known location, building
//! an HTTP client with a proper user agent string, downloading with a
//! size cap, and caching parsed documents with a freshness window.
//!
//! Failures here are ordinary: hosts without a robots.txt, slow servers,
//! misconfigured responses. The service layer converts all of them into
//! "no restrictions".

mod cache;

pub use cache::CachedRobots;

use crate::config::{Config, UserAgentConfig};
use crate::{FetchError, UrlError};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Resolves the robots.txt location for a resource URL
///
/// The policy document lives at the fixed `/robots.txt` path on the
/// resource's authority, same scheme, same host, same port.
///
/// # Arguments
///
/// * `resource` - The URL of the resource a crawler wants to fetch
///
/// # Returns
///
/// * `Ok(Url)` - The robots.txt URL for that authority
/// * `Err(UrlError)` - The resource URL has no host or a scheme other
///   than http/https
///
/// # Examples
///
/// ```
/// use torii_robots::fetch::robots_url_for;
/// use url::Url;
///
/// let resource = Url::parse("https://example.com/a/page?q=1").unwrap();
/// let robots = robots_url_for(&resource).unwrap();
/// assert_eq!(robots.as_str(), "https://example.com/robots.txt");
/// ```
pub fn robots_url_for(resource: &Url) -> Result<Url, UrlError> {
    if resource.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }
    match resource.scheme() {
        "http" | "https" => {}
        other => return Err(UrlError::InvalidScheme(other.to_string())),
    }

    let mut robots = resource.clone();
    robots.set_path("/robots.txt");
    robots.set_query(None);
    robots.set_fragment(None);
    Ok(robots)
}

/// Builds an HTTP client for robots.txt retrieval
///
/// # Arguments
///
/// * `user_agent` - Identification used in the User-Agent header, in the
///   format `Name/Version (+ContactURL; ContactEmail)`
/// * `timeout` - Total request timeout
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    let agent_string = format!(
        "{}/{} (+{}; {})",
        user_agent.crawler_name,
        user_agent.crawler_version,
        user_agent.contact_url,
        user_agent.contact_email
    );

    Client::builder()
        .user_agent(agent_string)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(5))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Downloads robots.txt bodies on behalf of the evaluation service
#[derive(Debug)]
pub struct RobotsFetcher {
    client: Client,
    max_document_bytes: usize,
}

impl RobotsFetcher {
    /// Creates a fetcher from the crate configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.fetch.request_timeout_secs),
        )?;
        Ok(Self {
            client,
            max_document_bytes: config.fetch.max_document_bytes,
        })
    }

    /// Fetches the document at `robots_url`, returning its raw bytes
    ///
    /// Oversized bodies are truncated at the configured cap; the tolerant
    /// parser copes with a cut final line.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The (possibly truncated) response body
    /// * `Err(FetchError)` - Transport failure, timeout, or non-2xx status
    pub async fn fetch(&self, robots_url: &Url) -> Result<Vec<u8>, FetchError> {
        tracing::debug!("fetching robots.txt: {}", robots_url);

        let response = self
            .client
            .get(robots_url.clone())
            .send()
            .await
            .map_err(|e| classify_error(e, robots_url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: robots_url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_error(e, robots_url))?;

        let mut bytes = body.to_vec();
        if bytes.len() > self.max_document_bytes {
            tracing::debug!(
                "robots.txt at {} exceeds {} bytes; truncating",
                robots_url,
                self.max_document_bytes
            );
            bytes.truncate(self.max_document_bytes);
        }
        Ok(bytes)
    }
}

fn classify_error(error: reqwest::Error, robots_url: &Url) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: robots_url.to_string(),
        }
    } else {
        FetchError::Http {
            url: robots_url.to_string(),
            source: error,
        }
    }
}
