use tracing::{error, info, instrument};

use gatehouse_cache::AuthToggle;
use gatehouse_core::AppError;
use gatehouse_db::{SettingsStore, get_settings};
use gatehouse_observability::track_toggle_write;

use crate::modules::settings::model::Settings;

pub struct SettingsService;

impl SettingsService {
    #[instrument(skip(store))]
    pub async fn get_settings(store: &dyn SettingsStore) -> Result<Settings, AppError> {
        get_settings(store).await.map_err(|e| {
            error!(error = %e, "Failed to read settings");
            AppError::database(anyhow::anyhow!("Failed to read settings"))
        })
    }

    /// Goes through the toggle cache so this process sees the new value
    /// immediately.
    #[instrument(skip(toggle))]
    pub async fn set_auth_enabled(
        toggle: &dyn AuthToggle,
        enabled: bool,
    ) -> Result<Settings, AppError> {
        let settings = toggle.set_auth_enabled(enabled).await.map_err(|e| {
            error!(error = %e, "Failed to update auth toggle");
            AppError::database(anyhow::anyhow!("Failed to update settings"))
        })?;

        track_toggle_write(settings.auth_enabled);
        info!(auth_enabled = settings.auth_enabled, "Auth toggle updated");

        Ok(settings)
    }
}
