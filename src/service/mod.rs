//! Top-level robots.txt evaluation service
//!
//! Ties the collaborators together: resolve the robots.txt location for a
//! resource, load the document (from cache or over HTTP), parse it, and
//! run the decision engine. The one externally observable decision API is
//! [`RobotsService::is_allowed`].

use crate::config::Config;
use crate::domain::Robots;
use crate::engine;
use crate::fetch::{robots_url_for, CachedRobots, RobotsFetcher};
use crate::{Result, RobotsError};
use std::collections::HashMap;
use tokio::sync::Mutex;
use url::Url;

/// Decides whether a crawler may fetch a resource
///
/// The service is fail-open end to end: an unreachable host, a missing or
/// oversized document, a rejected encoding, or content that is not a
/// robots.txt at all are each treated as "no restrictions published".
/// Only invalid direct arguments (an empty agent identity, a resource
/// locator without an http(s) authority) surface as errors.
///
/// Parsed documents are cached per robots.txt URL and refreshed after the
/// configured TTL.
pub struct RobotsService {
    fetcher: RobotsFetcher,
    cache: Mutex<HashMap<String, CachedRobots>>,
    cache_ttl_hours: i64,
}

impl RobotsService {
    /// Creates a service from the crate configuration
    ///
    /// # Returns
    ///
    /// * `Ok(RobotsService)` - Ready to evaluate
    /// * `Err(RobotsError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            fetcher: RobotsFetcher::new(config)?,
            cache: Mutex::new(HashMap::new()),
            cache_ttl_hours: config.fetch.cache_ttl_hours,
        })
    }

    /// Checks whether `agent` may fetch `resource`
    ///
    /// # Arguments
    ///
    /// * `agent` - The crawler identity token (not the full User-Agent
    ///   header value)
    /// * `resource` - The resource the crawler wants to fetch
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Allowed, including every fail-open case
    /// * `Ok(false)` - The host's rules disallow this path for this agent
    /// * `Err(RobotsError)` - `agent` is empty, or `resource` has no
    ///   http(s) authority to resolve a robots.txt against
    pub async fn is_allowed(&self, agent: &str, resource: &Url) -> Result<bool> {
        if agent.trim().is_empty() {
            return Err(RobotsError::EmptyAgent);
        }
        let robots_url = robots_url_for(resource)?;

        tracing::debug!("evaluating: {}", resource);

        let robots = match self.load(&robots_url).await {
            Ok(robots) => robots,
            Err(e) => {
                tracing::debug!("robots.txt unavailable ({}); allowing: {}", e, resource);
                return Ok(true);
            }
        };

        Ok(engine::evaluate(&robots, agent, resource.path()))
    }

    /// Loads the document for `robots_url`, consulting the cache first
    async fn load(&self, robots_url: &Url) -> Result<Robots> {
        let key = robots_url.to_string();

        {
            let cache = self.cache.lock().await;
            if let Some(cached) = cache.get(&key) {
                if !cached.is_stale(self.cache_ttl_hours) {
                    tracing::debug!("robots.txt cache hit: {}", robots_url);
                    return Ok(cached.robots().clone());
                }
            }
        }

        let bytes = self.fetcher.fetch(robots_url).await?;
        let robots = Robots::from_bytes(&bytes)?;
        tracing::debug!(
            "parsed robots.txt from {}: {} group(s)",
            robots_url,
            robots.groups().len()
        );

        self.cache
            .lock()
            .await
            .insert(key, CachedRobots::new(robots.clone()));
        Ok(robots)
    }
}
