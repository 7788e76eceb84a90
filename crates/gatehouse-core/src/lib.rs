//! # Gatehouse Core
//!
//! Foundational types shared by every Gatehouse crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_core::AppError;
//!
//! let error = AppError::forbidden(anyhow::anyhow!("Access denied. Required role: ADMIN"));
//! ```

pub mod errors;

pub use errors::AppError;
