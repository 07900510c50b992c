#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use news_service::application::services::NewsService;
use news_service::domain::audit::AuditRecord;
use news_service::infrastructure::persistence::{Database, PgNewsRepository};
use news_service::state::AppState;

/// Builds application state over an already-connected pool.
///
/// The receiver is returned so tests can assert on queued audit records; drop
/// it if the test does not care (the middleware tolerates a closed channel).
pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<AuditRecord>) {
    let db = Arc::new(Database::from_pool(pool));
    let repository = Arc::new(PgNewsRepository::new(db));
    let service = Arc::new(NewsService::new(repository));

    let (audit_tx, audit_rx) = mpsc::channel(100);
    (AppState::new(service, audit_tx), audit_rx)
}

pub fn test_repository(pool: PgPool) -> PgNewsRepository {
    PgNewsRepository::new(Arc::new(Database::from_pool(pool)))
}

/// A 24-hex id with a recognizable numeric suffix, e.g. `test_id(7)` ends in
/// `...007`.
pub fn test_id(n: u32) -> String {
    format!("{:024x}", n)
}

/// Midnight UTC of the given calendar day.
pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

pub async fn insert_news(
    pool: &PgPool,
    id: &str,
    date: DateTime<Utc>,
    title: &str,
    short_description: &str,
    text: &str,
) {
    sqlx::query(
        "INSERT INTO news (id, date, title, short_description, text) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(date)
    .bind(title)
    .bind(short_description)
    .bind(text)
    .execute(pool)
    .await
    .unwrap();
}

/// Inserts a row that violates the entity invariants (title below the minimum
/// length). The schema allows it; the repository must skip it on read.
pub async fn insert_corrupt_news(pool: &PgPool, id: &str, date: DateTime<Utc>) {
    insert_news(pool, id, date, "x", "valid description", "valid text body").await;
}
