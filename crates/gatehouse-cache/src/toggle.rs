//! Cached view of the `auth_enabled` setting.
//!
//! Requests read the toggle through [`FeatureToggleCache`], which serves a
//! value for up to its TTL before going back to the store. Concurrent misses
//! may each hit the store and the last one to finish wins; no request ever
//! waits on another request's refresh.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use metrics::counter;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

use gatehouse_db::{SETTINGS_ID, Settings, SettingsStore, StoreError, get_settings};

/// Read/write access to the global authentication toggle.
#[async_trait]
pub trait AuthToggle: Send + Sync {
    /// Whether authorization is active. Never fails: an unreachable store
    /// reads as `false`.
    async fn is_auth_enabled(&self) -> bool;

    /// Persists a new toggle value. On success the next read in this
    /// process observes it immediately.
    async fn set_auth_enabled(&self, enabled: bool) -> Result<Settings, StoreError>;

    /// Drops the cached value so the next read goes to the store.
    fn invalidate(&self);
}

#[derive(Debug, Clone, Copy)]
struct Cached {
    enabled: bool,
    fetched_at: Instant,
}

pub struct FeatureToggleCache {
    store: Arc<dyn SettingsStore>,
    ttl: Duration,
    cached: RwLock<Option<Cached>>,
}

impl std::fmt::Debug for FeatureToggleCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureToggleCache")
            .field("ttl", &self.ttl)
            .field("cached", &self.cached())
            .finish_non_exhaustive()
    }
}

impl FeatureToggleCache {
    pub fn new(store: Arc<dyn SettingsStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            cached: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached value if it is still fresh.
    pub fn cached(&self) -> Option<bool> {
        let entry = *self.cached.read().unwrap_or_else(PoisonError::into_inner);

        entry
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.enabled)
    }

    /// Reads the full settings record straight from the store.
    pub async fn settings(&self) -> Result<Settings, StoreError> {
        get_settings(self.store.as_ref()).await
    }

    fn remember(&self, enabled: bool) {
        let mut guard = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Cached {
            enabled,
            fetched_at: Instant::now(),
        });
    }
}

#[async_trait]
impl AuthToggle for FeatureToggleCache {
    #[instrument(skip(self))]
    async fn is_auth_enabled(&self) -> bool {
        if let Some(enabled) = self.cached() {
            counter!("gatehouse_toggle_cache_total", "result" => "hit").increment(1);
            return enabled;
        }

        counter!("gatehouse_toggle_cache_total", "result" => "miss").increment(1);

        match self.store.read_settings(SETTINGS_ID).await {
            Ok(settings) => {
                let enabled = settings.is_some_and(|s| s.auth_enabled);
                debug!(auth_enabled = enabled, "Refreshed auth toggle");
                self.remember(enabled);
                enabled
            }
            Err(e) => {
                counter!("gatehouse_settings_read_failures_total").increment(1);
                warn!(error = %e, "Settings store unavailable, treating auth as disabled");
                false
            }
        }
    }

    #[instrument(skip(self))]
    async fn set_auth_enabled(&self, enabled: bool) -> Result<Settings, StoreError> {
        let settings = self.store.upsert_settings(SETTINGS_ID, enabled).await?;
        self.remember(settings.auth_enabled);
        Ok(settings)
    }

    fn invalidate(&self) {
        let mut guard = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}
