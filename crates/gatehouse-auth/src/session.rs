//! Session resolution against the external identity provider.
//!
//! The decision engine only needs to know whether a session exists and which
//! role its user holds. Everything else about the identity is carried along
//! untouched for downstream handlers.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::http::{HeaderMap, header};
use axum_extra::extract::CookieJar;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use gatehouse_config::SessionConfig;

use crate::claims::SessionClaims;
use crate::jwt::verify_session_token;
use crate::roles::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// An authenticated session together with its user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub session: Session,
    pub user: User,
}

impl Identity {
    /// Builds an identity from verified claims, parsing the role at the edge.
    pub fn from_claims(claims: SessionClaims) -> Self {
        let expires_at = i64::try_from(claims.exp)
            .ok()
            .and_then(|exp| Utc.timestamp_opt(exp, 0).single());

        Self {
            session: Session {
                id: claims.sid,
                user_id: claims.sub.clone(),
                expires_at,
            },
            user: User {
                id: claims.sub,
                email: claims.email,
                name: claims.name,
                role: Role::from_optional(claims.role.as_deref()),
            },
        }
    }
}

/// Adapter to the identity provider.
///
/// Implementations must not fail: anything that prevents establishing a
/// session (missing credentials, bad signature, provider error) resolves to
/// `None`.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self, headers: &HeaderMap) -> Option<Identity>;
}

/// Resolves sessions from signed tokens presented as a bearer token or in the
/// session cookie.
#[derive(Debug, Clone)]
pub struct JwtSessionResolver {
    config: SessionConfig,
}

impl JwtSessionResolver {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Candidate tokens in order of precedence: bearer header, then cookie.
    fn tokens_from_headers(&self, headers: &HeaderMap) -> Vec<String> {
        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string);

        let cookie = CookieJar::from_headers(headers)
            .get(&self.config.cookie_name)
            .map(|cookie| cookie.value().to_string());

        bearer.into_iter().chain(cookie).collect()
    }
}

#[async_trait]
impl SessionResolver for JwtSessionResolver {
    /// A bearer token that fails verification does not hide a valid session
    /// cookie.
    async fn resolve(&self, headers: &HeaderMap) -> Option<Identity> {
        self.tokens_from_headers(headers)
            .into_iter()
            .find_map(|token| match verify_session_token(&token, &self.config) {
                Ok(claims) => Some(Identity::from_claims(claims)),
                Err(e) => {
                    debug!(error = %e.error, "Rejected session token");
                    None
                }
            })
    }
}

/// Resolver returning a fixed answer, counting how often it was asked.
#[derive(Debug, Default)]
pub struct StaticSessionResolver {
    identity: Option<Identity>,
    calls: AtomicUsize,
}

impl StaticSessionResolver {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            calls: AtomicUsize::new(0),
        }
    }

    /// Shorthand for a signed-in user holding the given raw role string.
    pub fn with_role(role: Option<&str>) -> Self {
        Self::signed_in(Identity {
            session: Session {
                id: "session-1".into(),
                user_id: "user-1".into(),
                expires_at: None,
            },
            user: User {
                id: "user-1".into(),
                email: Some("user@example.com".into()),
                name: None,
                role: Role::from_optional(role),
            },
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionResolver for StaticSessionResolver {
    async fn resolve(&self, _headers: &HeaderMap) -> Option<Identity> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.identity.clone()
    }
}
