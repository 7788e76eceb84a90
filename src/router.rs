use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router, extract::State, middleware};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use gatehouse_observability::{logging_middleware, metrics_middleware};

use crate::middleware::with_auth_pipeline;
use crate::modules::admin::init_admin_router;
use crate::modules::auth::init_auth_router;
use crate::modules::session::init_session_router;
use crate::modules::settings::init_settings_router;
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn render_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn init_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .nest("/auth", init_auth_router())
        .nest("/admin", init_admin_router())
        .nest(
            "/api",
            Router::new()
                .nest("/session", init_session_router())
                .nest("/settings", init_settings_router()),
        );

    // Unmatched paths go through the pipeline too and are protected by default.
    with_auth_pipeline(routes, state.clone())
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
