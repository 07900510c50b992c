//! Data Transfer Objects for API requests and responses.
//!
//! [`criteria`] is the query-surface parser: it turns the raw string tokens
//! of the list endpoint into a validated domain
//! [`crate::domain::criteria::Criteria`].

pub mod criteria;
pub mod health;
pub mod news;
