//! PostgreSQL implementation of the settings store.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::settings::{Settings, SettingsStore, StoreError};

#[derive(Clone, Debug)]
pub struct PgSettingsStore {
    db: PgPool,
}

impl PgSettingsStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    #[instrument(skip(self), fields(db.operation = "SELECT"))]
    async fn read_settings(&self, id: &str) -> Result<Option<Settings>, StoreError> {
        let settings = sqlx::query_as::<_, Settings>(
            r#"SELECT id, auth_enabled, created_at, updated_at
            FROM settings WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(settings)
    }

    #[instrument(skip(self), fields(db.operation = "UPSERT"))]
    async fn upsert_settings(&self, id: &str, auth_enabled: bool) -> Result<Settings, StoreError> {
        let settings = sqlx::query_as::<_, Settings>(
            r#"INSERT INTO settings (id, auth_enabled)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE
            SET auth_enabled = EXCLUDED.auth_enabled, updated_at = NOW()
            RETURNING id, auth_enabled, created_at, updated_at"#,
        )
        .bind(id)
        .bind(auth_enabled)
        .fetch_one(&self.db)
        .await?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SETTINGS_ID;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_read_missing_settings(pool: PgPool) {
        let store = PgSettingsStore::new(pool);

        assert!(store.read_settings(SETTINGS_ID).await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_upsert_creates_then_updates(pool: PgPool) {
        let store = PgSettingsStore::new(pool);

        let created = store.upsert_settings(SETTINGS_ID, true).await.unwrap();
        assert!(created.auth_enabled);

        let updated = store.upsert_settings(SETTINGS_ID, false).await.unwrap();
        assert!(!updated.auth_enabled);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let read = store.read_settings(SETTINGS_ID).await.unwrap().unwrap();
        assert_eq!(read, updated);
    }
}
