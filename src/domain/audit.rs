//! Request-audit record model and asynchronous audit worker.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

use crate::domain::repositories::AuditLog;

const RETRY_DELAY_MS: u64 = 200;
const RETRY_ATTEMPTS: usize = 2;

/// A structured trace of one handled HTTP request.
///
/// Built by the audit middleware after the response is produced and handed to
/// [`run_audit_worker`] over a channel, so persisting the trace never blocks
/// or fails the primary request.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    /// Time the request arrived.
    pub date: DateTime<Utc>,
    pub endpoint: String,
    pub method: String,
    /// Request headers as a JSON object.
    pub headers: Value,
    /// Request body, present for body-carrying methods only.
    pub body: Option<Value>,
    /// Raw query string, without the leading `?`.
    pub query: String,
    pub status_code: u16,
    /// Snapshot of the response body.
    pub response: Value,
    /// Processing duration in milliseconds.
    pub process_time_ms: i64,
}

/// Drains audit records from the channel and appends them to the audit log.
///
/// Each append is retried with a fixed backoff; a record that still fails is
/// logged and dropped. Runs until every sender is dropped.
pub async fn run_audit_worker<A: AuditLog + ?Sized>(
    mut rx: mpsc::Receiver<AuditRecord>,
    audit_log: Arc<A>,
) {
    while let Some(record) = rx.recv().await {
        let strategy = FixedInterval::from_millis(RETRY_DELAY_MS).take(RETRY_ATTEMPTS);

        let result = Retry::spawn(strategy, || {
            let audit_log = Arc::clone(&audit_log);
            let record = record.clone();
            async move { audit_log.append(record).await }
        })
        .await;

        if let Err(e) = result {
            tracing::warn!(
                error = ?e,
                endpoint = %record.endpoint,
                method = %record.method,
                "Failed to persist request audit record"
            );
            metrics::counter!("audit_records_dropped").increment(1);
        }
    }
}
