//! Domain-level validation errors.

use thiserror::Error;

/// A violated field invariant on a domain entity.
///
/// Carries the field path, the exact rejected value, and a human-readable
/// expectation so the API layer can report the failure without rebuilding
/// context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid `{path}`: expected {expectation}, received: {value}")]
pub struct DomainValidationError {
    pub path: &'static str,
    pub value: String,
    pub expectation: &'static str,
}

impl DomainValidationError {
    pub fn new(path: &'static str, value: impl Into<String>, expectation: &'static str) -> Self {
        Self {
            path,
            value: value.into(),
            expectation,
        }
    }
}
