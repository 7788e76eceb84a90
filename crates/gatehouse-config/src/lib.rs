//! # Gatehouse Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`gate`]: Route tables and sign-in target for the authorization pipeline
//! - [`session`]: Session token verification settings
//! - [`server`]: Listen address
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_config::{CorsConfig, GateConfig, ServerConfig, SessionConfig};
//!
//! let gate_config = GateConfig::from_env();
//! let session_config = SessionConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod gate;
pub mod server;
pub mod session;

pub use cors::CorsConfig;
pub use gate::GateConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;

/// Splits a comma separated environment value, dropping blank entries.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
