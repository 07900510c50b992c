//! Liveness endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports process liveness.
///
/// Deliberately does not touch the database: the connection is established
/// lazily on first use and a health probe must not force it.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
