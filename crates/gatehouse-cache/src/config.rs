//! Toggle cache configuration.

use std::env;
use std::time::Duration;

/// Default lifetime of a cached toggle value in milliseconds.
pub const DEFAULT_TOGGLE_TTL_MS: u64 = 5_000;

/// Toggle cache configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `AUTH_TOGGLE_TTL_MS`: how long a fetched toggle value is served without
///   re-reading the store (default: `5000`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    pub toggle_ttl: Duration,
}

impl CacheConfig {
    pub fn from_env() -> Self {
        let ttl_ms = env::var("AUTH_TOGGLE_TTL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOGGLE_TTL_MS);

        Self {
            toggle_ttl: Duration::from_millis(ttl_ms),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            toggle_ttl: Duration::from_millis(DEFAULT_TOGGLE_TTL_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_five_seconds() {
        assert_eq!(CacheConfig::default().toggle_ttl, Duration::from_secs(5));
    }
}
