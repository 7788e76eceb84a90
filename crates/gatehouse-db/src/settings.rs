//! The application settings singleton.
//!
//! Exactly one logical settings record exists per deployment, keyed by
//! [`SETTINGS_ID`]. It is created lazily by the first upsert; until then
//! readers observe `auth_enabled = false`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Primary key of the singleton settings row.
pub const SETTINGS_ID: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Settings {
    pub id: String,
    pub auth_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Settings {
    /// The record readers see before anything has been written.
    pub fn unsaved_default() -> Self {
        let now = Utc::now();
        Self {
            id: SETTINGS_ID.to_string(),
            auth_enabled: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Error type for settings persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence seam for the settings singleton.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads the record with the given id. `Ok(None)` means it was never written.
    async fn read_settings(&self, id: &str) -> Result<Option<Settings>, StoreError>;

    /// Creates the record or updates its `auth_enabled` flag.
    async fn upsert_settings(&self, id: &str, auth_enabled: bool) -> Result<Settings, StoreError>;
}

/// Returns the settings record, synthesizing the default when none exists.
///
/// Nothing is written when the default is synthesized.
pub async fn get_settings(store: &dyn SettingsStore) -> Result<Settings, StoreError> {
    Ok(store
        .read_settings(SETTINGS_ID)
        .await?
        .unwrap_or_else(Settings::unsaved_default))
}
