//! PostgreSQL-backed persistence.
//!
//! # Components
//!
//! - [`Database`] - lazy, memoized, single-flight connection handle
//! - [`query`] - translation of [`crate::domain::criteria::Criteria`] into SQL
//! - [`PgNewsRepository`] - news article storage and criteria queries
//! - [`PgAuditLog`] - request-audit persistence

pub mod database;
pub mod pg_audit_log;
pub mod pg_news_repository;
pub mod query;

pub use database::{Database, DatabaseSettings};
pub use pg_audit_log::PgAuditLog;
pub use pg_news_repository::PgNewsRepository;
