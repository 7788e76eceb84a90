use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::signin_page;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/signin", get(signin_page))
}
