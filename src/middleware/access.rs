use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, info, warn};

use gatehouse_auth::{AuthorizationContext, Outcome};
use gatehouse_core::AppError;
use gatehouse_observability::track_authz_decision;

use crate::state::AppState;

/// Second pipeline step.
///
/// Expects the context stored by the toggle step. When it is missing the
/// toggle is resolved here instead, so a wiring mistake can never silently
/// disable enforcement.
pub async fn enforce_access(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let context = match req.extensions().get::<AuthorizationContext>() {
        Some(context) => context.clone(),
        None => {
            warn!("Authorization context missing, resolving auth toggle in enforcement");
            AuthorizationContext::new(state.toggle.is_auth_enabled().await)
        }
    };

    let path = req.uri().path().to_owned();
    let outcome = state
        .engine
        .decide(context, &path, req.headers(), state.sessions.as_ref())
        .await;

    track_authz_decision(outcome.label());

    match outcome {
        Outcome::Passthrough(context) => {
            debug!(path = %path, user = ?context.user.as_ref().map(|u| &u.id), "Access granted");
            req.extensions_mut().insert(context);
            next.run(req).await
        }
        Outcome::RedirectSignin { location } => {
            debug!(path = %path, location = %location, "No session, redirecting to sign-in");
            Redirect::to(&location).into_response()
        }
        Outcome::Forbidden(reason) => {
            info!(path = %path, "Access denied");
            AppError::forbidden(reason).into_response()
        }
    }
}
