//! DTOs for the news endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::criteria::Paginated;
use crate::domain::entities::News;

/// Request body for creating an article.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsRequest {
    pub title: String,
    pub short_description: String,
    pub text: String,
}

/// Request body for partially updating an article. Absent fields stay
/// unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsRequest {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub text: Option<String>,
}

/// Response for a created article.
#[derive(Debug, Serialize)]
pub struct CreateNewsResponse {
    pub id: String,
}

/// JSON representation of one article.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub text: String,
    pub date: DateTime<Utc>,
}

impl From<&News> for NewsResponse {
    fn from(news: &News) -> Self {
        Self {
            id: news.id().to_string(),
            title: news.title().to_string(),
            short_description: news.short_description().to_string(),
            text: news.text().to_string(),
            date: news.date(),
        }
    }
}

/// One page of articles plus the total match count.
#[derive(Debug, Serialize)]
pub struct NewsListResponse {
    pub total: i64,
    pub items: Vec<NewsResponse>,
}

impl From<Paginated<News>> for NewsListResponse {
    fn from(page: Paginated<News>) -> Self {
        Self {
            total: page.total,
            items: page.items.iter().map(NewsResponse::from).collect(),
        }
    }
}
