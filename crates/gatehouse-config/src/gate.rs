//! Route tables for the authorization pipeline.
//!
//! The tables are read once at startup and never change while the process
//! runs. Role names are kept as raw strings here; `gatehouse-auth` parses
//! them into its role enum when it builds the route table.

use std::env;

use crate::split_list;

pub const DEFAULT_SIGNIN_PATH: &str = "/auth/signin";
pub const DEFAULT_PUBLIC_ROUTES: &str = "/auth/signin,/api/auth,/health,/metrics";
pub const DEFAULT_ADMIN_ROUTES: &str = "/admin=ADMIN,/api/settings=ADMIN";

/// Authorization pipeline configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SIGNIN_PATH`: redirect target for unauthenticated requests
///   (default: `/auth/signin`)
/// - `AUTH_PUBLIC_ROUTES`: comma separated path prefixes that never require a
///   session (default: `/auth/signin,/api/auth,/health,/metrics`)
/// - `AUTH_ADMIN_ROUTES`: comma separated `path=ROLE` pairs
///   (default: `/admin=ADMIN,/api/settings=ADMIN`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub signin_path: String,
    pub public_routes: Vec<String>,
    /// `(path prefix, role name)` pairs in priority order.
    pub admin_routes: Vec<(String, String)>,
}

impl GateConfig {
    pub fn from_env() -> Self {
        Self {
            signin_path: env::var("SIGNIN_PATH").unwrap_or_else(|_| DEFAULT_SIGNIN_PATH.into()),
            public_routes: split_list(
                &env::var("AUTH_PUBLIC_ROUTES").unwrap_or_else(|_| DEFAULT_PUBLIC_ROUTES.into()),
            ),
            admin_routes: parse_admin_routes(
                &env::var("AUTH_ADMIN_ROUTES").unwrap_or_else(|_| DEFAULT_ADMIN_ROUTES.into()),
            ),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            signin_path: DEFAULT_SIGNIN_PATH.into(),
            public_routes: split_list(DEFAULT_PUBLIC_ROUTES),
            admin_routes: parse_admin_routes(DEFAULT_ADMIN_ROUTES),
        }
    }
}

/// Parses `path=ROLE` pairs.
///
/// An entry without `=` keeps an empty role name so the route table builder
/// can report it instead of silently widening access.
pub fn parse_admin_routes(raw: &str) -> Vec<(String, String)> {
    split_list(raw)
        .into_iter()
        .map(|entry| match entry.split_once('=') {
            Some((path, role)) => (path.trim().to_string(), role.trim().to_string()),
            None => (entry, String::new()),
        })
        .collect()
}
