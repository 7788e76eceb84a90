use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_admin_overview;

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/", get(get_admin_overview))
}
