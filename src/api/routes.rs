//! API route configuration.

use crate::api::handlers::{
    create_news_handler, delete_news_handler, get_news_handler, list_news_handler,
    update_news_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All news API routes.
///
/// # Endpoints
///
/// - `GET    /news`       - Criteria query (pagination, sort, filter)
/// - `POST   /news`       - Create an article
/// - `GET    /news/{id}`  - Fetch one article
/// - `PATCH  /news/{id}`  - Partially update an article
/// - `DELETE /news/{id}`  - Delete an article
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(list_news_handler).post(create_news_handler))
        .route(
            "/news/{id}",
            get(get_news_handler)
                .patch(update_news_handler)
                .delete(delete_news_handler),
        )
}
