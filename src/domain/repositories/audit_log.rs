//! Sink trait for request-audit records.

use crate::domain::audit::AuditRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only sink for request traces.
///
/// Consumed by [`crate::domain::audit::run_audit_worker`]; append failures
/// are the worker's problem and never reach the request path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Appends one request trace.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn append(&self, record: AuditRecord) -> Result<(), AppError>;
}
