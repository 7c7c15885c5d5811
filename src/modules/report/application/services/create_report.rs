use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthorSummary;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::report::application::domain::entities::{
    Report, ReportStatus, ReportView, MAX_REASON_LENGTH,
};
use crate::modules::report::application::ports::outgoing::{
    ReportRepository, ReportRepositoryError,
};
use crate::shared::realtime::{EventBus, ForumEvent};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateReportError {
    #[error("Reason must be between 1 and {MAX_REASON_LENGTH} characters")]
    InvalidReason,

    #[error("A report must reference exactly one post or comment")]
    InvalidTarget,

    #[error("Report target not found")]
    TargetNotFound,

    #[error("Reporter not found")]
    ReporterNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreateReportCommand {
    reason: String,
    details: Option<String>,
    post_id: Option<Uuid>,
    comment_id: Option<Uuid>,
}

impl CreateReportCommand {
    pub fn new(
        reason: String,
        details: Option<String>,
        post_id: Option<Uuid>,
        comment_id: Option<Uuid>,
    ) -> Result<Self, CreateReportError> {
        let reason = reason.trim().to_string();
        if reason.is_empty() || reason.chars().count() > MAX_REASON_LENGTH {
            return Err(CreateReportError::InvalidReason);
        }

        if post_id.is_some() == comment_id.is_some() {
            return Err(CreateReportError::InvalidTarget);
        }

        Ok(Self {
            reason,
            details,
            post_id,
            comment_id,
        })
    }
}

#[async_trait]
pub trait ICreateReportUseCase: Send + Sync {
    async fn execute(
        &self,
        reporter_id: Uuid,
        command: CreateReportCommand,
    ) -> Result<ReportView, CreateReportError>;
}

pub struct CreateReportService<R>
where
    R: ReportRepository,
{
    repository: R,
    users: Arc<dyn UserQuery>,
    event_bus: Arc<dyn EventBus>,
}

impl<R> CreateReportService<R>
where
    R: ReportRepository,
{
    pub fn new(repository: R, users: Arc<dyn UserQuery>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            repository,
            users,
            event_bus,
        }
    }
}

#[async_trait]
impl<R> ICreateReportUseCase for CreateReportService<R>
where
    R: ReportRepository,
{
    async fn execute(
        &self,
        reporter_id: Uuid,
        command: CreateReportCommand,
    ) -> Result<ReportView, CreateReportError> {
        let reporter = self
            .users
            .find_by_id(reporter_id)
            .await
            .map_err(|e| CreateReportError::RepositoryError(e.to_string()))?
            .ok_or(CreateReportError::ReporterNotFound)?;

        let report = Report {
            id: Uuid::new_v4(),
            reason: command.reason,
            details: command.details,
            reporter_id,
            post_id: command.post_id,
            comment_id: command.comment_id,
            status: ReportStatus::Pending,
            created_at: Utc::now(),
        };

        let created = self.repository.create(report).await.map_err(|e| match e {
            ReportRepositoryError::TargetNotFound => CreateReportError::TargetNotFound,
            ReportRepositoryError::DatabaseError(msg) => {
                CreateReportError::RepositoryError(msg)
            }
        })?;

        let view = ReportView {
            id: created.id,
            reason: created.reason,
            details: created.details,
            reporter: AuthorSummary::from(&reporter),
            post_id: created.post_id,
            comment_id: created.comment_id,
            status: created.status,
            created_at: created.created_at,
        };

        self.event_bus.publish(ForumEvent::global(
            "newReport",
            serde_json::to_value(&view)
                .map_err(|e| CreateReportError::RepositoryError(e.to_string()))?,
        ));

        Ok(view)
    }
}
