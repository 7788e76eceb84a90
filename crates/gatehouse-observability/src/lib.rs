//! Gatehouse Observability
//!
//! Provides configurable observability features including:
//! - Console, rolling-file and JSON logging via `tracing`
//! - Distributed tracing via OpenTelemetry when an OTLP endpoint is configured
//! - Prometheus metrics for HTTP traffic and authorization decisions
//!
//! Compiled in with the `observability` feature (default). At runtime it can be
//! switched off with `OBSERVABILITY_ENABLED=false`, in which case only console
//! logging is set up.
//!
//! # Examples
//!
//! ```no_run
//! use gatehouse_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing()?;
//!     // ... application code ...
//!     shutdown_tracer().await;
//!     Ok(())
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    MetricsHandle, init_metrics, metrics_middleware, track_authz_decision, track_toggle_write,
};

#[cfg(feature = "observability")]
static OBSERVABILITY_ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();

/// Check if observability is enabled via the `OBSERVABILITY_ENABLED` env var.
#[cfg(feature = "observability")]
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{extract::Request, middleware::Next, response::Response};

    /// Placeholder for the Prometheus handle; renders nothing.
    #[derive(Clone, Debug, Default)]
    pub struct MetricsHandle;

    impl MetricsHandle {
        pub fn render(&self) -> String {
            String::new()
        }
    }

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// Console logging only.
    pub fn init_tracing() -> anyhow::Result<()> {
        super::init_basic_console_logging()
    }

    pub async fn shutdown_tracer() {}

    pub fn init_metrics() -> Option<MetricsHandle> {
        None
    }

    pub fn track_authz_decision(_outcome: &'static str) {}
    pub fn track_toggle_write(_enabled: bool) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
