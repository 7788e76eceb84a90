//! # Gatehouse DB
//!
//! Database pool and settings persistence for Gatehouse.
//!
//! - [`settings`]: The settings singleton, the [`SettingsStore`] seam and its errors
//! - [`postgres`]: SQLx/PostgreSQL implementation of [`SettingsStore`]
//! - [`memory`]: In-process implementation for tests and local development
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_db::{init_db_pool, run_migrations, PgSettingsStore, SettingsStore, SETTINGS_ID};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = init_db_pool().await?;
//!     run_migrations(&pool).await?;
//!
//!     let store = PgSettingsStore::new(pool);
//!     let settings = store.read_settings(SETTINGS_ID).await?;
//!     Ok(())
//! }
//! ```

pub mod memory;
pub mod postgres;
pub mod settings;

use std::env;

pub use memory::InMemorySettingsStore;
pub use postgres::PgSettingsStore;
pub use settings::{SETTINGS_ID, Settings, SettingsStore, StoreError, get_settings};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Initializes a PostgreSQL connection pool from `DATABASE_URL`.
///
/// The returned pool is cheaply cloneable and should be created once at
/// startup and handed to the stores that need it.
///
/// # Errors
///
/// Returns [`StoreError::Config`] when `DATABASE_URL` is missing and
/// [`StoreError::Database`] when the first connection cannot be established.
pub async fn init_db_pool() -> Result<PgPool, StoreError> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| StoreError::Config("DATABASE_URL must be set".into()))?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Applies the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
