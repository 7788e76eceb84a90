use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use gatehouse_auth::AuthorizationContext;

use crate::state::AppState;

/// First pipeline step. Never fails: an unreachable store resolves to
/// `auth_enabled = false`.
pub async fn resolve_auth_toggle(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let auth_enabled = state.toggle.is_auth_enabled().await;
    debug!(auth_enabled, path = %req.uri().path(), "Resolved auth toggle");

    req.extensions_mut()
        .insert(AuthorizationContext::new(auth_enabled));

    next.run(req).await
}
