//! Business logic services for the application layer.

pub mod news_service;

pub use news_service::{CreateNewsInput, NewsService, UpdateNewsInput};
