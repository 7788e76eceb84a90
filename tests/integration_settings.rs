mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{
    TestApp, body_json, get, get_with_token, send, session_config, setup_test_app,
    setup_test_app_with, token_for,
};
use gatehouse_auth::JwtSessionResolver;
use gatehouse_cache::CacheConfig;
use gatehouse_config::GateConfig;
use gatehouse_db::{SETTINGS_ID, SettingsStore};
use serde_json::json;

async fn setup(auth_enabled: bool) -> TestApp {
    setup_test_app(
        auth_enabled,
        Arc::new(JwtSessionResolver::new(session_config())),
    )
    .await
}

fn put_auth(enabled: bool, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("PUT")
        .uri("/api/settings/auth")
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder
        .body(Body::from(
            serde_json::to_string(&json!({ "enabled": enabled })).unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_get_settings_as_admin() {
    let app = setup(true).await;

    let response = send(&app, get_with_token("/api/settings", &token_for(Some("ADMIN")))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "default");
    assert_eq!(body["auth_enabled"], true);
}

#[tokio::test]
async fn test_get_settings_as_user_is_forbidden() {
    let app = setup(true).await;

    let response = send(&app, get_with_token("/api/settings", &token_for(Some("USER")))).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_cannot_flip_toggle() {
    let app = setup(true).await;

    let response = send(&app, put_auth(false, Some(&token_for(Some("ADMIN"))))).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Access denied. Required role: SUPER_ADMIN");

    // Still enforced.
    let response = send(&app, get("/admin")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_super_admin_disable_takes_effect_immediately() {
    let app = setup(true).await;

    // Prime the cache with `true`.
    let response = send(&app, get("/admin")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = send(&app, put_auth(false, Some(&token_for(Some("SUPER_ADMIN"))))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["auth_enabled"], false);

    let response = send(&app, get("/admin")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_enable_while_disabled_takes_effect_immediately() {
    let app = setup(false).await;

    // Prime the cache with `false`.
    let response = send(&app, get("/admin")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, put_auth(true, None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get("/admin")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth/signin"
    );
}

#[tokio::test]
async fn test_failed_write_surfaces_error_and_keeps_toggle() {
    let app = setup(false).await;

    let response = send(&app, get("/admin")).await;
    assert_eq!(response.status(), StatusCode::OK);

    app.store.set_available(false);

    let response = send(&app, put_auth(true, None)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to update settings");

    // Cached `false` is still served.
    let response = send(&app, get("/admin")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_anonymous_toggle_write_on_public_route_redirects_to_signin() {
    let gate_config = GateConfig {
        public_routes: vec!["/auth/signin".into(), "/api/settings".into()],
        ..GateConfig::default()
    };
    let app = setup_test_app_with(
        true,
        Arc::new(JwtSessionResolver::new(session_config())),
        &gate_config,
        &CacheConfig::default(),
    )
    .await;

    let response = send(&app, put_auth(false, None)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth/signin"
    );

    let settings = app.store.read_settings(SETTINGS_ID).await.unwrap().unwrap();
    assert!(settings.auth_enabled);
}
