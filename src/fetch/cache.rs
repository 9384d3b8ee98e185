//! Freshness tracking for fetched robots.txt documents
//!
//! Hosts change their exclusion rules; a parsed document is only trusted
//! for a bounded window before it is re-fetched.

use crate::domain::Robots;
use chrono::{DateTime, Duration, Utc};

/// A parsed robots.txt document together with its fetch time
#[derive(Debug, Clone)]
pub struct CachedRobots {
    robots: Robots,
    fetched_at: DateTime<Utc>,
}

impl CachedRobots {
    /// Wraps a freshly parsed document with the current timestamp
    pub fn new(robots: Robots) -> Self {
        Self {
            robots,
            fetched_at: Utc::now(),
        }
    }

    #[cfg(test)]
    fn with_fetched_at(robots: Robots, fetched_at: DateTime<Utc>) -> Self {
        Self { robots, fetched_at }
    }

    /// The cached document
    pub fn robots(&self) -> &Robots {
        &self.robots
    }

    /// How long ago the document was fetched
    pub fn age(&self) -> Duration {
        Utc::now() - self.fetched_at
    }

    /// Whether the document is older than the given freshness window
    pub fn is_stale(&self, ttl_hours: i64) -> bool {
        self.age() > Duration::hours(ttl_hours)
    }
}
