//! PostgreSQL implementation of the request-audit sink.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::audit::AuditRecord;
use crate::domain::repositories::AuditLog;
use crate::error::AppError;
use crate::infrastructure::persistence::database::Database;

/// Appends request traces to the `request_log` table.
pub struct PgAuditLog {
    db: Arc<Database>,
}

impl PgAuditLog {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuditLog for PgAuditLog {
    async fn append(&self, record: AuditRecord) -> Result<(), AppError> {
        let pool = self.db.pool().await?;

        sqlx::query(
            r#"
            INSERT INTO request_log
                (date, endpoint, method, headers, body, query, status_code, response, process_time_ms)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(record.date)
        .bind(&record.endpoint)
        .bind(&record.method)
        .bind(&record.headers)
        .bind(&record.body)
        .bind(&record.query)
        .bind(i32::from(record.status_code))
        .bind(&record.response)
        .bind(record.process_time_ms)
        .execute(&pool)
        .await?;

        Ok(())
    }
}
