use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::auth::application::domain::entities::{AuthorSummary, Role};
use crate::modules::report::application::domain::entities::Report;
use crate::modules::report::application::ports::outgoing::{
    ReportRecord, ReportRepository, ReportRepositoryError,
};

use super::sea_orm_entity::reports;

fn is_foreign_key_violation(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("foreign key") || lower.contains("23503")
}

fn author_summary(user: users::Model) -> AuthorSummary {
    AuthorSummary {
        id: user.id,
        username: user.username,
        avatar: user.avatar,
        role: Role::parse(&user.role),
    }
}

#[derive(Clone, Debug)]
pub struct ReportRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReportRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportRepository for ReportRepositoryPostgres {
    async fn create(&self, report: Report) -> Result<Report, ReportRepositoryError> {
        let row = reports::ActiveModel {
            id: Set(report.id),
            reason: Set(report.reason.clone()),
            details: Set(report.details.clone()),
            reporter_id: Set(report.reporter_id),
            post_id: Set(report.post_id),
            comment_id: Set(report.comment_id),
            status: Set(report.status.as_str().to_string()),
            created_at: Set(report.created_at.into()),
            updated_at: Set(Utc::now().into()),
        };

        match row.insert(&*self.db).await {
            Ok(created) => Ok(created.into()),
            // The target columns carry FK constraints, a missing post or
            // comment surfaces here rather than through an extra lookup.
            Err(err) if is_foreign_key_violation(&err.to_string()) => {
                Err(ReportRepositoryError::TargetNotFound)
            }
            Err(err) => Err(ReportRepositoryError::DatabaseError(err.to_string())),
        }
    }

    async fn list_all(&self) -> Result<Vec<ReportRecord>, ReportRepositoryError> {
        let rows = reports::Entity::find()
            .order_by_desc(reports::Column::CreatedAt)
            .find_also_related(users::Entity)
            .all(&*self.db)
            .await
            .map_err(|e| ReportRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(model, reporter)| ReportRecord {
                report: model.into(),
                reporter: reporter.map(author_summary),
            })
            .collect())
    }

    async fn find_by_id(
        &self,
        report_id: Uuid,
    ) -> Result<Option<ReportRecord>, ReportRepositoryError> {
        let row = reports::Entity::find_by_id(report_id)
            .find_also_related(users::Entity)
            .one(&*self.db)
            .await
            .map_err(|e| ReportRepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(|(model, reporter)| ReportRecord {
            report: model.into(),
            reporter: reporter.map(author_summary),
        }))
    }
}
