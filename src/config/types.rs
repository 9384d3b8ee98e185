use serde::Deserialize;

/// Main configuration structure for Torii-Robots
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Crawler identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler; also the identity evaluated against
    /// user-agent groups unless the caller supplies its own
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email", default = "default_contact_email")]
    pub contact_email: String,
}

/// Robots.txt fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Total timeout for one robots.txt request, in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Cap on the downloaded document size; larger bodies are truncated
    #[serde(rename = "max-document-bytes", default = "default_max_bytes")]
    pub max_document_bytes: usize,

    /// How long a fetched document stays fresh before re-fetching
    #[serde(rename = "cache-ttl-hours", default = "default_ttl_hours")]
    pub cache_ttl_hours: i64,
}

fn default_crawler_name() -> String {
    "torii-robots".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://example.com/crawler".to_string()
}

fn default_contact_email() -> String {
    "crawler@example.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_bytes() -> usize {
    // The de-facto interoperability cap for robots.txt bodies
    512 * 1024
}

fn default_ttl_hours() -> i64 {
    24
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: default_contact_url(),
            contact_email: default_contact_email(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout_secs(),
            max_document_bytes: default_max_bytes(),
            cache_ttl_hours: default_ttl_hours(),
        }
    }
}
