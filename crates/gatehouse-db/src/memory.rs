//! In-memory settings store.
//!
//! Not durable: state is lost on restart. Used by tests and by local runs
//! without a database. [`InMemorySettingsStore::set_available`] simulates an
//! outage so callers can exercise their failure paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::settings::{Settings, SettingsStore, StoreError};

#[derive(Debug)]
pub struct InMemorySettingsStore {
    records: RwLock<HashMap<String, Settings>>,
    available: AtomicBool,
    reads: AtomicUsize,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
            reads: AtomicUsize::new(0),
        }
    }

    /// Toggles simulated availability. While unavailable every call fails
    /// with [`StoreError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of `read_settings` calls received, including failed ones.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("in-memory store offline".into()))
        }
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn read_settings(&self, id: &str) -> Result<Option<Settings>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.ensure_available()?;

        Ok(self.records.read().await.get(id).cloned())
    }

    async fn upsert_settings(&self, id: &str, auth_enabled: bool) -> Result<Settings, StoreError> {
        self.ensure_available()?;

        let now = Utc::now();
        let mut records = self.records.write().await;
        let record = records
            .entry(id.to_string())
            .and_modify(|existing| {
                existing.auth_enabled = auth_enabled;
                existing.updated_at = now;
            })
            .or_insert_with(|| Settings {
                id: id.to_string(),
                auth_enabled,
                created_at: now,
                updated_at: now,
            });

        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SETTINGS_ID;

    #[tokio::test]
    async fn test_upsert_keeps_created_at() {
        let store = InMemorySettingsStore::new();

        let created = store.upsert_settings(SETTINGS_ID, true).await.unwrap();
        let updated = store.upsert_settings(SETTINGS_ID, false).await.unwrap();

        assert_eq!(created.created_at, updated.created_at);
        assert!(!updated.auth_enabled);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_reads_and_writes() {
        let store = InMemorySettingsStore::new();
        store.set_available(false);

        assert!(store.read_settings(SETTINGS_ID).await.is_err());
        assert!(store.upsert_settings(SETTINGS_ID, true).await.is_err());
        assert_eq!(store.reads(), 1);

        store.set_available(true);
        assert!(store.read_settings(SETTINGS_ID).await.unwrap().is_none());
    }
}
