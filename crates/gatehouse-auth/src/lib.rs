//! # Gatehouse Auth
//!
//! Authorization primitives for the Gatehouse request pipeline.
//!
//! This crate provides:
//!
//! - [`roles`]: the three-level role hierarchy and role checks
//! - [`routes`]: classification of request paths into public and protected areas
//! - [`claims`] and [`jwt`]: session token claims, minting and verification
//! - [`session`]: the [`SessionResolver`] seam to the identity provider
//! - [`context`]: the per-request [`AuthorizationContext`]
//! - [`decision`]: the [`DecisionEngine`] turning all of the above into an [`Outcome`]
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_auth::{AuthorizationContext, DecisionEngine, JwtSessionResolver, Outcome};
//! use gatehouse_config::{GateConfig, SessionConfig};
//!
//! let engine = DecisionEngine::from_config(&GateConfig::from_env());
//! let sessions = JwtSessionResolver::new(SessionConfig::from_env());
//!
//! match engine
//!     .decide(AuthorizationContext::new(true), "/admin", &headers, &sessions)
//!     .await
//! {
//!     Outcome::Passthrough(context) => { /* run the handler */ }
//!     Outcome::RedirectSignin { location } => { /* 303 */ }
//!     Outcome::Forbidden(reason) => { /* 403 */ }
//! }
//! ```

pub mod claims;
pub mod context;
pub mod decision;
pub mod jwt;
pub mod roles;
pub mod routes;
pub mod session;

pub use claims::SessionClaims;
pub use context::AuthorizationContext;
pub use decision::{AccessDenied, DecisionEngine, Outcome, ROUTE_FORBIDDEN_MESSAGE, require_role};
pub use jwt::{TokenSubject, create_session_token, verify_session_token};
pub use roles::{Role, UnknownRole, has_role, is_admin, is_super_admin};
pub use routes::{RouteClass, RouteRule, RouteTable};
pub use session::{
    Identity, JwtSessionResolver, Session, SessionResolver, StaticSessionResolver, User,
};
