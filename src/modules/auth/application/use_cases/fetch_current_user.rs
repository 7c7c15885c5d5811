use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserView;
use crate::modules::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchCurrentUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserView, FetchCurrentUserError>;
}

pub struct FetchCurrentUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchCurrentUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchCurrentUserUseCase for FetchCurrentUserService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserView, FetchCurrentUserError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchCurrentUserError::QueryError(e.to_string()))?
            .ok_or(FetchCurrentUserError::UserNotFound)?;

        Ok(UserView::from(&user))
    }
}
