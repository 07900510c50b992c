//! Handlers for the news CRUD and criteria-query endpoints.

use std::sync::LazyLock;

use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use regex::Regex;

use crate::api::dto::criteria::parse_criteria;
use crate::api::dto::news::{
    CreateNewsRequest, CreateNewsResponse, NewsListResponse, NewsResponse, UpdateNewsRequest,
};
use crate::application::services::news_service::{CreateNewsInput, UpdateNewsInput};
use crate::error::AppError;
use crate::state::AppState;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9a-fA-F]{24}$").unwrap());

fn validate_id(id: &str) -> Result<(), AppError> {
    if ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(AppError::validation("id", "24 hex characters", id))
    }
}

/// Creates a news article.
///
/// # Endpoint
///
/// `POST /api/news` with `{"title", "shortDescription", "text"}`
///
/// # Errors
///
/// Returns 400 Bad Request when a field violates the entity invariants; the
/// details name the field, the expected shape, and the rejected value.
pub async fn create_news_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateNewsRequest>,
) -> Result<(StatusCode, Json<CreateNewsResponse>), AppError> {
    let id = state
        .news_service
        .create_news(CreateNewsInput {
            title: payload.title,
            short_description: payload.short_description,
            text: payload.text,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CreateNewsResponse { id })))
}

/// Retrieves one article by id.
///
/// # Endpoint
///
/// `GET /api/news/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed id, 404 Not Found when the id
/// does not resolve.
pub async fn get_news_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<NewsResponse>, AppError> {
    validate_id(&id)?;

    let news = state
        .news_service
        .find_news_by_id(&id)
        .await?
        .ok_or_else(|| AppError::entity_not_found(&id))?;

    Ok(Json(NewsResponse::from(&news)))
}

/// Partially updates an article. Only provided fields are changed, each
/// revalidated against the entity invariants.
///
/// # Endpoint
///
/// `PATCH /api/news/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed id or invalid field value,
/// 404 Not Found when the id does not resolve.
pub async fn update_news_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateNewsRequest>,
) -> Result<StatusCode, AppError> {
    validate_id(&id)?;

    state
        .news_service
        .update_news(UpdateNewsInput {
            id,
            title: payload.title,
            short_description: payload.short_description,
            text: payload.text,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an article by id.
///
/// # Endpoint
///
/// `DELETE /api/news/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed id, 404 Not Found when the id
/// does not resolve.
pub async fn delete_news_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    validate_id(&id)?;

    state.news_service.delete_news(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Runs a criteria query over the articles.
///
/// # Endpoint
///
/// `GET /api/news?page=&limit=&sort[]=&filterConditions[]=&filterRelation=`
///
/// The raw query string is handed to the criteria parser rather than a typed
/// extractor because the repeatable `sort[]`/`filterConditions[]` tokens are
/// order-significant.
///
/// # Errors
///
/// Returns 400 Bad Request naming the offending token when the query surface
/// is malformed.
pub async fn list_news_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<NewsListResponse>, AppError> {
    let criteria = parse_criteria(query.as_deref().unwrap_or(""))?;

    let page = state
        .news_service
        .find_and_count_news_by_criteria(&criteria)
        .await?;

    Ok(Json(NewsListResponse::from(page)))
}
