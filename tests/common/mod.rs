#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gatehouse::router::init_router;
use gatehouse::state::AppState;
use gatehouse_auth::{SessionResolver, TokenSubject, create_session_token};
use gatehouse_cache::CacheConfig;
use gatehouse_config::{GateConfig, SessionConfig};
use gatehouse_db::{InMemorySettingsStore, SETTINGS_ID, SettingsStore};

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemorySettingsStore>,
}

pub fn session_config() -> SessionConfig {
    SessionConfig {
        secret: TEST_SECRET.into(),
        cookie_name: "gatehouse.session_token".into(),
        max_age_secs: 300,
    }
}

/// App backed by an in-memory store seeded with `auth_enabled`.
pub async fn setup_test_app(auth_enabled: bool, sessions: Arc<dyn SessionResolver>) -> TestApp {
    setup_test_app_with(
        auth_enabled,
        sessions,
        &GateConfig::default(),
        &CacheConfig::default(),
    )
    .await
}

/// Same as [`setup_test_app`] with explicit route and cache configuration.
pub async fn setup_test_app_with(
    auth_enabled: bool,
    sessions: Arc<dyn SessionResolver>,
    gate_config: &GateConfig,
    cache_config: &CacheConfig,
) -> TestApp {
    let (state, store) = setup_test_state(auth_enabled, sessions, gate_config, cache_config).await;

    TestApp {
        router: init_router(state),
        store,
    }
}

/// State for tests that assemble their own router.
pub async fn setup_test_state(
    auth_enabled: bool,
    sessions: Arc<dyn SessionResolver>,
    gate_config: &GateConfig,
    cache_config: &CacheConfig,
) -> (AppState, Arc<InMemorySettingsStore>) {
    let store = Arc::new(InMemorySettingsStore::new());
    store
        .upsert_settings(SETTINGS_ID, auth_enabled)
        .await
        .unwrap();

    let state = AppState::new(store.clone(), sessions, gate_config, cache_config);
    (state, store)
}

pub fn token_for(role: Option<&str>) -> String {
    create_session_token(
        &TokenSubject {
            user_id: "user-1",
            email: Some("user@example.com"),
            name: Some("Test User"),
            role,
        },
        &session_config(),
    )
    .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
