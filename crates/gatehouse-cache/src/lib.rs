//! # Gatehouse Cache
//!
//! In-process caching of the global authentication toggle.
//!
//! This crate provides:
//! - [`CacheConfig`]: TTL configuration loaded from the environment
//! - [`AuthToggle`]: the read/write seam the request pipeline depends on
//! - [`FeatureToggleCache`]: a TTL-bounded, write-through implementation
//!   backed by any [`SettingsStore`](gatehouse_db::SettingsStore)
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gatehouse_cache::{AuthToggle, CacheConfig, FeatureToggleCache};
//! use gatehouse_db::PgSettingsStore;
//!
//! let config = CacheConfig::from_env();
//! let toggle = FeatureToggleCache::new(Arc::new(PgSettingsStore::new(pool)), config.toggle_ttl);
//!
//! if toggle.is_auth_enabled().await {
//!     // run the decision engine
//! }
//! ```

pub mod config;
pub mod toggle;

pub use config::CacheConfig;
pub use toggle::{AuthToggle, FeatureToggleCache};
