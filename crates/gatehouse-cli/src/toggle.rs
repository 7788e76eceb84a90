use anyhow::Context;
use gatehouse_db::{SETTINGS_ID, Settings, SettingsStore, get_settings};

pub async fn auth_status(store: &dyn SettingsStore) -> anyhow::Result<Settings> {
    get_settings(store)
        .await
        .context("Failed to read settings")
}

/// Writes the toggle straight to the store. Running servers pick the change
/// up once their cached value expires.
pub async fn set_auth(store: &dyn SettingsStore, enabled: bool) -> anyhow::Result<Settings> {
    store
        .upsert_settings(SETTINGS_ID, enabled)
        .await
        .context("Failed to update settings")
}

pub fn describe(settings: &Settings) -> String {
    let state = if settings.auth_enabled {
        "enabled"
    } else {
        "disabled"
    };
    format!(
        "Authentication is {} (updated {})",
        state,
        settings.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
