use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{AuthorSummary, Role};
use crate::modules::report::application::domain::entities::ReportView;
use crate::modules::report::application::ports::outgoing::{
    ReportRecord, ReportRepository,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchReportsError {
    #[error("Moderator role required")]
    Forbidden,

    #[error("Report not found")]
    ReportNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchReportsUseCase: Send + Sync {
    async fn list_all(&self, caller_role: Role) -> Result<Vec<ReportView>, FetchReportsError>;

    async fn find(
        &self,
        caller_role: Role,
        report_id: Uuid,
    ) -> Result<ReportView, FetchReportsError>;
}

pub struct FetchReportsService<R>
where
    R: ReportRepository,
{
    repository: R,
}

impl<R> FetchReportsService<R>
where
    R: ReportRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn view_of(record: ReportRecord) -> ReportView {
        let reporter = record.reporter.unwrap_or_else(|| AuthorSummary {
            id: record.report.reporter_id,
            username: "deleted".to_string(),
            avatar: None,
            role: Role::User,
        });
        ReportView {
            id: record.report.id,
            reason: record.report.reason,
            details: record.report.details,
            reporter,
            post_id: record.report.post_id,
            comment_id: record.report.comment_id,
            status: record.report.status,
            created_at: record.report.created_at,
        }
    }
}

#[async_trait]
impl<R> IFetchReportsUseCase for FetchReportsService<R>
where
    R: ReportRepository,
{
    async fn list_all(&self, caller_role: Role) -> Result<Vec<ReportView>, FetchReportsError> {
        if !caller_role.can_moderate() {
            return Err(FetchReportsError::Forbidden);
        }

        let records = self
            .repository
            .list_all()
            .await
            .map_err(|e| FetchReportsError::QueryError(e.to_string()))?;

        Ok(records.into_iter().map(Self::view_of).collect())
    }

    async fn find(
        &self,
        caller_role: Role,
        report_id: Uuid,
    ) -> Result<ReportView, FetchReportsError> {
        if !caller_role.can_moderate() {
            return Err(FetchReportsError::Forbidden);
        }

        let record = self
            .repository
            .find_by_id(report_id)
            .await
            .map_err(|e| FetchReportsError::QueryError(e.to_string()))?
            .ok_or(FetchReportsError::ReportNotFound)?;

        Ok(Self::view_of(record))
    }
}
