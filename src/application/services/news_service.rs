//! News command and query orchestration.

use std::sync::Arc;

use crate::domain::criteria::{Criteria, Paginated};
use crate::domain::entities::News;
use crate::domain::repositories::NewsRepository;
use crate::error::AppError;

/// Input for creating a news article.
#[derive(Debug, Clone)]
pub struct CreateNewsInput {
    pub title: String,
    pub short_description: String,
    pub text: String,
}

/// Partial update for an existing article. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateNewsInput {
    pub id: String,
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub text: Option<String>,
}

/// Service coordinating the news CRUD commands and criteria queries.
///
/// Thin orchestration over the repository: the entity validates itself, the
/// repository translates criteria; this layer sequences lookups, mutations,
/// and saves, and turns missing ids into not-found signals.
pub struct NewsService<R: NewsRepository> {
    news_repository: Arc<R>,
}

impl<R: NewsRepository> NewsService<R> {
    pub fn new(news_repository: Arc<R>) -> Self {
        Self { news_repository }
    }

    /// Creates an article and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field violates the entity
    /// invariants, [`AppError::Internal`] on storage errors.
    pub async fn create_news(&self, input: CreateNewsInput) -> Result<String, AppError> {
        let news = News::create(input.title, input.short_description, input.text)?;
        self.news_repository.save(&news).await?;

        tracing::info!(id = %news.id(), title = %news.title(), "Created news");
        Ok(news.id().to_string())
    }

    /// Applies a partial update; only provided fields are revalidated and
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve,
    /// [`AppError::Validation`] if a new value violates the entity
    /// invariants, [`AppError::Internal`] on storage errors.
    pub async fn update_news(&self, input: UpdateNewsInput) -> Result<(), AppError> {
        let mut news = self
            .news_repository
            .find_by_id(&input.id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(&input.id))?;

        let mut updated = Vec::new();

        if let Some(title) = input.title {
            news.change_title(title)?;
            updated.push("title");
        }

        if let Some(short_description) = input.short_description {
            news.change_short_description(short_description)?;
            updated.push("shortDescription");
        }

        if let Some(text) = input.text {
            news.change_text(text)?;
            updated.push("text");
        }

        self.news_repository.save(&news).await?;

        tracing::info!(id = %news.id(), fields = updated.join(", "), "Updated news");
        Ok(())
    }

    /// Deletes an article by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve,
    /// [`AppError::Internal`] on storage errors.
    pub async fn delete_news(&self, id: &str) -> Result<(), AppError> {
        let news = self
            .news_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(id))?;

        self.news_repository.delete(&news).await?;

        tracing::info!(id = %id, "Deleted news");
        Ok(())
    }

    /// Looks up an article by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_news_by_id(&self, id: &str) -> Result<Option<News>, AppError> {
        self.news_repository.find_by_id(id).await
    }

    /// Runs a criteria query, returning one page plus the total match count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_and_count_news_by_criteria(
        &self,
        criteria: &Criteria,
    ) -> Result<Paginated<News>, AppError> {
        self.news_repository.find_and_count_by_criteria(criteria).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockNewsRepository;

    fn input() -> CreateNewsInput {
        CreateNewsInput {
            title: "Breaking story".to_string(),
            short_description: "Something happened".to_string(),
            text: "The full text of the story".to_string(),
        }
    }

    fn stored_news() -> News {
        News::create("Stored title", "Stored description", "Stored text body").unwrap()
    }

    #[tokio::test]
    async fn test_create_news_saves_and_returns_id() {
        let mut mock_repo = MockNewsRepository::new();
        mock_repo
            .expect_save()
            .withf(|news| news.title() == "Breaking story")
            .times(1)
            .returning(|_| Ok(()));

        let service = NewsService::new(Arc::new(mock_repo));
        let id = service.create_news(input()).await.unwrap();

        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_create_news_rejects_invalid_title_without_saving() {
        let mock_repo = MockNewsRepository::new();

        let service = NewsService::new(Arc::new(mock_repo));
        let mut bad = input();
        bad.title = "ab".to_string();

        let err = service.create_news(bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_news_not_found() {
        let mut mock_repo = MockNewsRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = NewsService::new(Arc::new(mock_repo));
        let err = service
            .update_news(UpdateNewsInput {
                id: "0123456789abcdef01234567".to_string(),
                title: Some("New title".to_string()),
                short_description: None,
                text: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_news_changes_only_provided_fields() {
        let existing = stored_news();

        let mut mock_repo = MockNewsRepository::new();
        let found = existing.clone();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));
        mock_repo
            .expect_save()
            .withf(|news| {
                news.title() == "Fresh title"
                    && news.short_description() == "Stored description"
                    && news.text() == "Stored text body"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = NewsService::new(Arc::new(mock_repo));
        service
            .update_news(UpdateNewsInput {
                id: existing.id().to_string(),
                title: Some("Fresh title".to_string()),
                short_description: None,
                text: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_news_invalid_value_is_rejected_before_save() {
        let existing = stored_news();

        let mut mock_repo = MockNewsRepository::new();
        let found = existing.clone();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));
        // No expect_save: a validation failure must not reach the repository.

        let service = NewsService::new(Arc::new(mock_repo));
        let err = service
            .update_news(UpdateNewsInput {
                id: existing.id().to_string(),
                title: None,
                short_description: None,
                text: Some("no".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_news_not_found() {
        let mut mock_repo = MockNewsRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = NewsService::new(Arc::new(mock_repo));
        let err = service.delete_news("0123456789abcdef01234567").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_news_removes_found_entity() {
        let existing = stored_news();
        let id = existing.id().to_string();

        let mut mock_repo = MockNewsRepository::new();
        let found = existing.clone();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));
        let expected_id = id.clone();
        mock_repo
            .expect_delete()
            .withf(move |news| news.id() == expected_id)
            .times(1)
            .returning(|_| Ok(true));

        let service = NewsService::new(Arc::new(mock_repo));
        service.delete_news(&id).await.unwrap();
    }
}
