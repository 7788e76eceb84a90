use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directives, with noisy dependencies kept at warn.
pub(crate) fn default_filter(level: &str) -> String {
    format!(
        "gatehouse={level},gatehouse_auth={level},gatehouse_cache={level},gatehouse_db={level},\
         gatehouse_cli={level},tower_http=warn,hyper=warn,tonic=warn,h2=warn,sqlx=warn"
    )
}

/// Initialize basic console logging when observability is disabled.
///
/// # Configuration
///
/// - **Log Level**: Controlled by `LOG_LEVEL` environment variable (default: "info")
/// - **Filtering**: `RUST_LOG` overrides everything when set
/// - **Format**: Compact format with ANSI colors
///
/// # Errors
///
/// Fails if a global subscriber was already installed.
pub fn init_basic_console_logging() -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;

    tracing::debug!("Console logging initialized, observability disabled");
    Ok(())
}
