//! HTTP request handlers.

pub mod health;
pub mod news;

pub use health::health_handler;
pub use news::{
    create_news_handler, delete_news_handler, get_news_handler, list_news_handler,
    update_news_handler,
};
