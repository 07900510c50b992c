//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Liveness check (public, never touches the database)
//! - `/api/*`       - News REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Audit** - Per-request audit records for `/api/*` routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{audit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::routes()
        .layer(middleware::from_fn_with_state(state.clone(), audit::layer));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
