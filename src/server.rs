//! HTTP server initialization and runtime setup.
//!
//! Handles database handle construction, worker spawning, and Axum server
//! lifecycle. The database is never dialed here; the first request that needs
//! it triggers the connection attempt.

use crate::config::Config;
use crate::application::services::NewsService;
use crate::domain::audit::run_audit_worker;
use crate::infrastructure::persistence::{
    Database, DatabaseSettings, PgAuditLog, PgNewsRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Lazy PostgreSQL database handle (connected on first use)
/// - Background audit worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the server fails to bind or a runtime error occurs.
/// A missing database is deliberately not an error at this point.
pub async fn run(config: Config) -> Result<()> {
    let db = Arc::new(Database::new(DatabaseSettings {
        url: config.database_url.clone(),
        max_connections: config.db_max_connections,
        connect_timeout: Duration::from_secs(config.db_connect_timeout),
        idle_timeout: Duration::from_secs(config.db_idle_timeout),
        max_lifetime: Duration::from_secs(config.db_max_lifetime),
    }));

    let (audit_tx, audit_rx) = mpsc::channel(config.audit_queue_capacity);

    let audit_log = Arc::new(PgAuditLog::new(db.clone()));
    tokio::spawn(run_audit_worker(audit_rx, audit_log));
    tracing::info!("Audit worker started");

    let news_repository = Arc::new(PgNewsRepository::new(db.clone()));
    let news_service = Arc::new(NewsService::new(news_repository));

    let state = AppState::new(news_service, audit_tx);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
