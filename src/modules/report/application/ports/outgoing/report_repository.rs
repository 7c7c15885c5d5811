use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthorSummary;
use crate::modules::report::application::domain::entities::Report;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReportRepositoryError {
    #[error("Report target not found")]
    TargetNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct ReportRecord {
    pub report: Report,
    pub reporter: Option<AuthorSummary>,
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn create(&self, report: Report) -> Result<Report, ReportRepositoryError>;

    /// All reports newest first, reporter summary joined in.
    async fn list_all(&self) -> Result<Vec<ReportRecord>, ReportRepositoryError>;

    async fn find_by_id(
        &self,
        report_id: Uuid,
    ) -> Result<Option<ReportRecord>, ReportRepositoryError>;
}
