//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod audit_log;
pub mod news_repository;

pub use audit_log::AuditLog;
pub use news_repository::NewsRepository;

#[cfg(test)]
pub use audit_log::MockAuditLog;
#[cfg(test)]
pub use news_repository::MockNewsRepository;
