//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - The validated news article entity
//! - [`criteria`] - The language-agnostic query descriptor and result envelope
//! - [`repositories`] - Data access trait definitions
//! - [`audit`] - Request-audit record model and asynchronous audit worker
//! - [`errors`] - Domain validation errors
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in [`crate::application::services`]
//!
//! # Audit Flow
//!
//! 1. The audit middleware snapshots request and response
//! 2. An [`audit::AuditRecord`] is sent to an async channel (fire-and-forget)
//! 3. [`audit::run_audit_worker`] appends records with retry
//! 4. Failures are logged and counted, never surfaced to the caller

pub mod audit;
pub mod criteria;
pub mod entities;
pub mod errors;
pub mod repositories;
