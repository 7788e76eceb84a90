//! Route classification.
//!
//! Paths are matched against two static tables with literal, case-sensitive
//! prefix matching: a rule path `p` matches `p` itself and anything under
//! `p/`. Public routes are checked first, so a public route can never be
//! role-protected.

use gatehouse_config::GateConfig;
use tracing::warn;

use crate::roles::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// No session required.
    Public,
    /// Session required, and the user's role must rank at or above this one.
    RoleProtected(Role),
    /// Any authenticated session.
    DefaultProtected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub path: String,
    pub role: Role,
}

impl RouteRule {
    pub fn new(path: impl Into<String>, role: Role) -> Self {
        Self {
            path: path.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    public: Vec<String>,
    protected: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(public: Vec<String>, protected: Vec<RouteRule>) -> Self {
        Self { public, protected }
    }

    /// Builds the table from configuration.
    ///
    /// Entries whose role does not name a defined role are dropped with a
    /// warning; the paths they named fall back to default protection.
    pub fn from_config(config: &GateConfig) -> Self {
        let protected = config
            .admin_routes
            .iter()
            .filter_map(|(path, role)| match role.parse::<Role>() {
                Ok(role) => Some(RouteRule::new(path.clone(), role)),
                Err(e) => {
                    warn!(path = %path, error = %e, "Ignoring admin route with invalid role");
                    None
                }
            })
            .collect();

        Self::new(config.public_routes.clone(), protected)
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        if self.public.iter().any(|route| matches_prefix(path, route)) {
            return RouteClass::Public;
        }

        self.protected
            .iter()
            .find(|rule| matches_prefix(path, &rule.path))
            .map(|rule| RouteClass::RoleProtected(rule.role))
            .unwrap_or(RouteClass::DefaultProtected)
    }

    pub fn public_routes(&self) -> &[String] {
        &self.public
    }

    pub fn protected_routes(&self) -> &[RouteRule] {
        &self.protected
    }
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
