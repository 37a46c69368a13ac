//! HTTP API for the marketing studio demo.
//!
//! Serves the single-page front end, a fixed demo login, and the
//! `generate_task` endpoint that relays marketing copy from the configured
//! generation client. Nothing is persisted.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use generation::GenerationClient;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<C: GenerationClient + 'static>(
    state: Arc<AppState<C>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::index::serve::<C>))
        .route("/health", get(routes::health::check))
        .route("/api/login", post(routes::account::login::<C>))
        .route("/api/register", post(routes::account::register))
        .route("/api/update_password", post(routes::account::update_password))
        .route("/api/tasks/{uid}", get(routes::tasks::list))
        .route("/api/generate_task", post(routes::tasks::generate::<C>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
