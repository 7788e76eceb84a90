use axum::{Json, extract::State};
use tracing::instrument;

use gatehouse_auth::Role;
use gatehouse_core::AppError;

use crate::middleware::{AuthRejection, RequestAuth};
use crate::modules::settings::model::{Settings, UpdateAuthSettingsDto};
use crate::modules::settings::service::SettingsService;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>, AppError> {
    let settings = SettingsService::get_settings(state.settings.as_ref()).await?;
    Ok(Json(settings))
}

/// Flips the global toggle. Super admins only once auth is on; while it is
/// off anyone who can reach the route may turn it on. Anonymous callers
/// are sent to sign in.
#[instrument(skip(state, auth))]
pub async fn update_auth_settings(
    State(state): State<AppState>,
    auth: RequestAuth,
    Json(dto): Json<UpdateAuthSettingsDto>,
) -> Result<Json<Settings>, AuthRejection> {
    auth.require_role(Role::SuperAdmin, state.engine.signin_path())?;

    let settings = SettingsService::set_auth_enabled(state.toggle.as_ref(), dto.enabled).await?;
    Ok(Json(settings))
}
