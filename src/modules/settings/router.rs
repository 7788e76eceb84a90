use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{get_settings, update_auth_settings};

pub fn init_settings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings))
        .route("/auth", put(update_auth_settings))
}
