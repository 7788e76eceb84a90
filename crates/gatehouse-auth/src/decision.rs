//! Authorization decision engine.
//!
//! ```text
//! START -> TOGGLE_RESOLVED -> PASSTHROUGH                       (auth disabled)
//!                          -> CLASSIFY -> PASSTHROUGH           (public route)
//!                                      -> AUTHENTICATE -> REDIRECT_SIGNIN
//!                                                      -> AUTHORIZE -> FORBIDDEN
//!                                                                   -> PASSTHROUGH
//! ```
//!
//! Every step is a plain function that either hands an updated
//! [`AuthorizationContext`] to the next step or stops with an [`Outcome`].
//! The verdict depends only on the toggle, the path, whether a session exists
//! and the user's role.

use axum::http::HeaderMap;
use gatehouse_config::GateConfig;

use crate::context::AuthorizationContext;
use crate::roles::Role;
use crate::routes::{RouteClass, RouteTable};
use crate::session::{Identity, SessionResolver, User};

pub const ROUTE_FORBIDDEN_MESSAGE: &str =
    "Access denied. You do not have permission to view this page.";

/// Why access was refused. The message never reveals more than the literal
/// role name of the protected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("Access denied. You do not have permission to view this page.")]
    Route,

    #[error("Access denied. Required role: {0}")]
    MissingRole(Role),
}

/// Terminal state of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Continue to the application with this context.
    Passthrough(AuthorizationContext),
    /// 303 to the sign-in page.
    RedirectSignin { location: String },
    /// 403 with a fixed message.
    Forbidden(AccessDenied),
}

impl Outcome {
    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passthrough(_) => "passthrough",
            Outcome::RedirectSignin { .. } => "redirect_signin",
            Outcome::Forbidden(_) => "forbidden",
        }
    }
}

/// Result of a single step.
#[derive(Debug)]
pub enum Step<T> {
    Continue(T),
    Halt(Outcome),
}

#[derive(Debug, Clone)]
pub struct DecisionEngine {
    routes: RouteTable,
    signin_path: String,
}

impl DecisionEngine {
    pub fn new(routes: RouteTable, signin_path: impl Into<String>) -> Self {
        Self {
            routes,
            signin_path: signin_path.into(),
        }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(RouteTable::from_config(config), config.signin_path.clone())
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn signin_path(&self) -> &str {
        &self.signin_path
    }

    /// Runs the full pipeline for one request.
    ///
    /// The resolver is only consulted when auth is enabled and the route is
    /// not public.
    pub async fn decide<R>(
        &self,
        context: AuthorizationContext,
        path: &str,
        headers: &HeaderMap,
        sessions: &R,
    ) -> Outcome
    where
        R: SessionResolver + ?Sized,
    {
        let context = match gate_toggle(context) {
            Step::Continue(context) => context,
            Step::Halt(outcome) => return outcome,
        };

        let (context, class) = match self.classify(context, path) {
            Step::Continue(next) => next,
            Step::Halt(outcome) => return outcome,
        };

        let identity = sessions.resolve(headers).await;

        let context = match self.authenticate(context, identity) {
            Step::Continue(context) => context,
            Step::Halt(outcome) => return outcome,
        };

        authorize(context, class)
    }

    /// CLASSIFY: public routes stop here.
    pub fn classify(
        &self,
        context: AuthorizationContext,
        path: &str,
    ) -> Step<(AuthorizationContext, RouteClass)> {
        match self.routes.classify(path) {
            RouteClass::Public => Step::Halt(Outcome::Passthrough(context)),
            class => Step::Continue((context, class)),
        }
    }

    /// AUTHENTICATE: no session means a redirect to the fixed sign-in path.
    pub fn authenticate(
        &self,
        context: AuthorizationContext,
        identity: Option<Identity>,
    ) -> Step<AuthorizationContext> {
        match identity {
            Some(identity) => Step::Continue(context.with_identity(identity)),
            None => Step::Halt(Outcome::RedirectSignin {
                location: self.signin_path.clone(),
            }),
        }
    }
}

/// TOGGLE_RESOLVED: with auth disabled nothing else is evaluated.
pub fn gate_toggle(context: AuthorizationContext) -> Step<AuthorizationContext> {
    if context.auth_enabled {
        Step::Continue(context)
    } else {
        Step::Halt(Outcome::Passthrough(context))
    }
}

/// AUTHORIZE: compare the user's role with the route's requirement.
pub fn authorize(context: AuthorizationContext, class: RouteClass) -> Outcome {
    match class {
        RouteClass::Public | RouteClass::DefaultProtected => Outcome::Passthrough(context),
        RouteClass::RoleProtected(required) => {
            let allowed = context
                .role()
                .is_some_and(|role| role.satisfies(required));

            if allowed {
                Outcome::Passthrough(context)
            } else {
                Outcome::Forbidden(AccessDenied::Route)
            }
        }
    }
}

/// Role-keyed check for use inside handlers.
///
/// Returns the user when their role ranks at or above `required`, and `None`
/// while auth is disabled. Anonymous callers are denied like any other
/// caller lacking the role.
pub fn require_role(
    context: &AuthorizationContext,
    required: Role,
) -> Result<Option<&User>, AccessDenied> {
    if !context.auth_enabled {
        return Ok(None);
    }

    match context.user.as_ref() {
        Some(user) if user.role.satisfies(required) => Ok(Some(user)),
        _ => Err(AccessDenied::MissingRole(required)),
    }
}
