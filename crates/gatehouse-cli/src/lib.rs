//! # Gatehouse CLI
//!
//! Operator commands behind the `gatehouse-cli` binary.
//!
//! - [`toggle`]: read and flip the persisted `auth_enabled` setting
//! - [`routes`]: dry-run the decision engine for a path and role
//! - [`tokens`]: mint session tokens for local testing
//!
//! ## Usage
//!
//! ```ignore
//! use gatehouse_cli::routes::check_route;
//!
//! let report = check_route(&engine, "/admin", Some("USER"), true).await;
//! println!("{report}");
//! ```

pub mod routes;
pub mod tokens;
pub mod toggle;
