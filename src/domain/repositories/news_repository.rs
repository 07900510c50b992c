//! Repository trait for news article data access.

use crate::domain::criteria::{Criteria, Paginated};
use crate::domain::entities::News;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for news articles.
///
/// CRUD plus the criteria-query surface, backed by a document-shaped store.
/// The implementation owns the storage connection and its lifecycle.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgNewsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Upserts an article keyed by its id.
    ///
    /// Creates the stored document when absent, fully overwrites the mutable
    /// fields when present. Saving the same entity state twice produces the
    /// same stored document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, news: &News) -> Result<(), AppError>;

    /// Removes an article by identity.
    ///
    /// Returns `Ok(true)` if a document was removed, `Ok(false)` if nothing
    /// matched the id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, news: &News) -> Result<bool, AppError>;

    /// Looks up an article by id.
    ///
    /// A stored document that fails to map back into a valid [`News`] is
    /// logged as a warning and reported as `Ok(None)`; a mapping failure
    /// alone never surfaces as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<News>, AppError>;

    /// Runs the criteria query: filter, sort, paginate, plus an independent
    /// count of every matching document.
    ///
    /// Documents that fail to map into entities are logged and skipped, so
    /// `items` may be shorter than the page size while `total` still reflects
    /// the raw match count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_and_count_by_criteria(
        &self,
        criteria: &Criteria,
    ) -> Result<Paginated<News>, AppError>;

    /// Unconditionally removes every article. Test/reset use only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_all(&self) -> Result<(), AppError>;
}
