//! Shared application state.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::NewsService;
use crate::domain::audit::AuditRecord;
use crate::infrastructure::persistence::PgNewsRepository;

/// State shared across all request handlers.
///
/// Cloning is cheap; every field is an [`Arc`] or a channel handle.
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService<PgNewsRepository>>,
    pub audit_tx: mpsc::Sender<AuditRecord>,
}

impl AppState {
    pub fn new(
        news_service: Arc<NewsService<PgNewsRepository>>,
        audit_tx: mpsc::Sender<AuditRecord>,
    ) -> Self {
        Self {
            news_service,
            audit_tx,
        }
    }
}
