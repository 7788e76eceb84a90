use std::fmt;

use axum::http::HeaderMap;
use gatehouse_auth::{
    AuthorizationContext, DecisionEngine, Outcome, RouteClass, StaticSessionResolver,
};

/// What the pipeline would do with one request.
#[derive(Debug)]
pub struct RouteReport {
    pub path: String,
    pub class: RouteClass,
    pub outcome: Outcome,
}

/// Runs `path` through the decision engine.
///
/// `role` of `None` simulates an anonymous request; `Some(role)` a signed-in
/// user holding that raw role string.
pub async fn check_route(
    engine: &DecisionEngine,
    path: &str,
    role: Option<&str>,
    auth_enabled: bool,
) -> RouteReport {
    let sessions = match role {
        Some(role) => StaticSessionResolver::with_role(Some(role)),
        None => StaticSessionResolver::anonymous(),
    };

    let outcome = engine
        .decide(
            AuthorizationContext::new(auth_enabled),
            path,
            &HeaderMap::new(),
            &sessions,
        )
        .await;

    RouteReport {
        path: path.to_string(),
        class: engine.routes().classify(path),
        outcome,
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match self.class {
            RouteClass::Public => "public".to_string(),
            RouteClass::RoleProtected(role) => format!("requires {role}"),
            RouteClass::DefaultProtected => "requires a session".to_string(),
        };

        match &self.outcome {
            Outcome::Passthrough(_) => write!(f, "{} ({}): allowed", self.path, class),
            Outcome::RedirectSignin { location } => {
                write!(f, "{} ({}): redirect to {}", self.path, class, location)
            }
            Outcome::Forbidden(reason) => {
                write!(f, "{} ({}): forbidden, \"{}\"", self.path, class, reason)
            }
        }
    }
}
