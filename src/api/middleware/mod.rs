//! Request processing middleware.

pub mod audit;
pub mod tracing;
