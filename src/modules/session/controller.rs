use axum::Json;

use gatehouse_auth::AuthorizationContext;

use crate::middleware::RequestAuth;

/// Echoes what the pipeline resolved for this request.
pub async fn get_session(RequestAuth(context): RequestAuth) -> Json<AuthorizationContext> {
    Json(context)
}
