use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use gatehouse_auth::{DecisionEngine, JwtSessionResolver, SessionResolver};
use gatehouse_cache::{AuthToggle, CacheConfig, FeatureToggleCache};
use gatehouse_config::{CorsConfig, GateConfig, SessionConfig};
use gatehouse_db::{
    InMemorySettingsStore, PgSettingsStore, SettingsStore, init_db_pool, run_migrations,
};
use gatehouse_observability::MetricsHandle;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<dyn SettingsStore>,
    pub toggle: Arc<dyn AuthToggle>,
    pub sessions: Arc<dyn SessionResolver>,
    pub engine: Arc<DecisionEngine>,
    pub cors_config: CorsConfig,
    pub metrics: Option<MetricsHandle>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("engine", &self.engine)
            .field("cors_config", &self.cors_config)
            .field("metrics", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires the pipeline around the given store and identity provider.
    ///
    /// The toggle cache is created here so the settings endpoints and the
    /// request pipeline share one cached value.
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        sessions: Arc<dyn SessionResolver>,
        gate_config: &GateConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        let toggle = FeatureToggleCache::new(settings.clone(), cache_config.toggle_ttl);

        Self {
            settings,
            toggle: Arc::new(toggle),
            sessions,
            engine: Arc::new(DecisionEngine::from_config(gate_config)),
            cors_config: CorsConfig::default(),
            metrics: None,
        }
    }

    pub fn with_cors(mut self, cors_config: CorsConfig) -> Self {
        self.cors_config = cors_config;
        self
    }

    pub fn with_metrics(mut self, metrics: Option<MetricsHandle>) -> Self {
        self.metrics = metrics;
        self
    }
}

/// Builds the production state from the environment.
///
/// Uses PostgreSQL when `DATABASE_URL` is set and an in-memory store
/// otherwise.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let settings: Arc<dyn SettingsStore> = if std::env::var("DATABASE_URL").is_ok() {
        let pool = init_db_pool().await?;
        run_migrations(&pool).await?;
        info!("Using PostgreSQL settings store");
        Arc::new(PgSettingsStore::new(pool))
    } else {
        warn!("DATABASE_URL not set, settings will not survive a restart");
        Arc::new(InMemorySettingsStore::new())
    };

    let sessions = Arc::new(JwtSessionResolver::new(SessionConfig::from_env()));

    Ok(AppState::new(
        settings,
        sessions,
        &GateConfig::from_env(),
        &CacheConfig::from_env(),
    )
    .with_cors(CorsConfig::from_env())
    .with_metrics(gatehouse_observability::init_metrics()))
}
