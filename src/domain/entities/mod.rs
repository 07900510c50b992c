//! Core domain entities.
//!
//! The [`News`] article is the only persistent entity of the service. Unlike
//! plain data structs, it enforces its field invariants itself: construction,
//! rehydration from storage, and every mutator run the same validation.

pub mod news;

pub use news::News;
