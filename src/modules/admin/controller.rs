use axum::Json;
use serde::Serialize;

use gatehouse_auth::{Role, User};

use crate::middleware::RequestAuth;

#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub auth_enabled: bool,
    pub user: Option<User>,
    pub can_manage_settings: bool,
}

/// Admin landing. Reaching it at all means the route table let the caller
/// through.
pub async fn get_admin_overview(RequestAuth(context): RequestAuth) -> Json<AdminOverview> {
    let can_manage_settings =
        !context.auth_enabled || context.role().is_some_and(|r| r.satisfies(Role::SuperAdmin));

    Json(AdminOverview {
        auth_enabled: context.auth_enabled,
        user: context.user,
        can_manage_settings,
    })
}
