//! The request authorization pipeline.
//!
//! Two middleware run in a fixed order in front of every route:
//!
//! 1. [`toggle::resolve_auth_toggle`] reads the cached `auth_enabled` flag and
//!    stores a fresh [`AuthorizationContext`] in the request extensions.
//! 2. [`access::enforce_access`] runs the decision engine against that
//!    context and either forwards the request with the enriched context or
//!    answers with a redirect or a 403.
//!
//! Handlers read the final context through the [`RequestAuth`] extractor.
//!
//! [`AuthorizationContext`]: gatehouse_auth::AuthorizationContext

pub mod access;
pub mod context;
pub mod toggle;

use axum::{Router, middleware};

use crate::state::AppState;

pub use access::enforce_access;
pub use context::{AuthRejection, RequestAuth};
pub use toggle::resolve_auth_toggle;

/// Wraps `router` in the toggle and enforcement steps.
///
/// Layers added later run earlier, so the toggle layer is added last. Each
/// step runs exactly once per request; a short-circuit in enforcement never
/// re-enters toggle resolution.
pub fn with_auth_pipeline(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router
        .layer(middleware::from_fn_with_state(state.clone(), enforce_access))
        .layer(middleware::from_fn_with_state(state, resolve_auth_toggle))
}
