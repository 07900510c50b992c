//! PostgreSQL implementation of the news repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::criteria::{Criteria, Paginated};
use crate::domain::entities::News;
use crate::domain::errors::DomainValidationError;
use crate::domain::repositories::NewsRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::database::Database;
use crate::infrastructure::persistence::query;

/// PostgreSQL repository for news articles.
///
/// The connection is acquired through [`Database`], so the first operation
/// triggers the lazy single-flight connect.
pub struct PgNewsRepository {
    db: Arc<Database>,
}

/// Raw stored shape of an article; turned into a [`News`] through the same
/// validation as construction.
#[derive(sqlx::FromRow)]
struct NewsRow {
    id: String,
    date: DateTime<Utc>,
    title: String,
    short_description: String,
    text: String,
}

impl NewsRow {
    fn into_entity(self) -> Result<News, DomainValidationError> {
        News::rehydrate(self.id, self.date, self.title, self.short_description, self.text)
    }
}

impl PgNewsRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewsRepository for PgNewsRepository {
    async fn save(&self, news: &News) -> Result<(), AppError> {
        let pool = self.db.pool().await?;

        sqlx::query(
            r#"
            INSERT INTO news (id, date, title, short_description, text)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                date = EXCLUDED.date,
                title = EXCLUDED.title,
                short_description = EXCLUDED.short_description,
                text = EXCLUDED.text
            "#,
        )
        .bind(news.id())
        .bind(news.date())
        .bind(news.title())
        .bind(news.short_description())
        .bind(news.text())
        .execute(&pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, news: &News) -> Result<bool, AppError> {
        let pool = self.db.pool().await?;

        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(news.id())
            .execute(&pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<News>, AppError> {
        let pool = self.db.pool().await?;

        let row = sqlx::query_as::<_, NewsRow>(
            "SELECT id, date, title, short_description, text FROM news WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        match row.into_entity() {
            Ok(news) => Ok(Some(news)),
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Failed to map stored document to entity");
                metrics::counter!("news_documents_skipped").increment(1);
                Ok(None)
            }
        }
    }

    async fn find_and_count_by_criteria(
        &self,
        criteria: &Criteria,
    ) -> Result<Paginated<News>, AppError> {
        let pool = self.db.pool().await?;

        let mut select = query::build_select(criteria);
        let rows = select.build_query_as::<NewsRow>().fetch_all(&pool).await?;

        // Deliberately a second, independent read: total counts the whole
        // matching set and the two reads share no snapshot.
        let mut count = query::build_count(criteria);
        let total = count.build_query_scalar::<i64>().fetch_one(&pool).await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.id.clone();
            match row.into_entity() {
                Ok(news) => items.push(news),
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "Failed to map stored document to entity");
                    metrics::counter!("news_documents_skipped").increment(1);
                }
            }
        }

        Ok(Paginated { total, items })
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        let pool = self.db.pool().await?;

        sqlx::query("DELETE FROM news").execute(&pool).await?;

        Ok(())
    }
}
