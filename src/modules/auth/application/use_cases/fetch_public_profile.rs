use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserView;
use crate::modules::auth::application::ports::outgoing::{
    ProfileComment, ProfileContentQuery, ProfilePost, UserQuery,
};
use crate::modules::vote::application::domain::entities::TargetKind;
use crate::modules::vote::application::ports::outgoing::VoteAggregator;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchPublicProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileView {
    pub user: UserView,
    pub posts: Vec<ProfilePost>,
    pub comments: Vec<ProfileComment>,
    pub saved_posts: Vec<ProfilePost>,
    pub vote_count: u64,
    pub report_count: u64,
}

#[async_trait]
pub trait IFetchPublicProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        username: &str,
        viewer: Option<Uuid>,
    ) -> Result<PublicProfileView, FetchPublicProfileError>;
}

pub struct FetchPublicProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
    content: Arc<dyn ProfileContentQuery>,
    aggregator: Arc<dyn VoteAggregator>,
}

impl<Q> FetchPublicProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        content: Arc<dyn ProfileContentQuery>,
        aggregator: Arc<dyn VoteAggregator>,
    ) -> Self {
        Self {
            query,
            content,
            aggregator,
        }
    }

    /// Vote enrichment is best effort; on failure the posts are returned
    /// with zeroed counts rather than failing the whole profile.
    async fn enrich(&self, posts: &mut [ProfilePost], viewer: Option<Uuid>) {
        if posts.is_empty() {
            return;
        }
        let ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        match self
            .aggregator
            .summaries(TargetKind::Post, &ids, viewer)
            .await
        {
            Ok(mut summaries) => {
                for post in posts.iter_mut() {
                    if let Some(summary) = summaries.remove(&post.id) {
                        post.votes = summary;
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Profile vote enrichment failed: {}", e);
            }
        }
    }
}

#[async_trait]
impl<Q> IFetchPublicProfileUseCase for FetchPublicProfileService<Q>
where
    Q: UserQuery,
{
    async fn execute(
        &self,
        username: &str,
        viewer: Option<Uuid>,
    ) -> Result<PublicProfileView, FetchPublicProfileError> {
        let user = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| FetchPublicProfileError::QueryError(e.to_string()))?
            .ok_or(FetchPublicProfileError::UserNotFound)?;

        let mut content = self
            .content
            .content_for(user.id)
            .await
            .map_err(|e| FetchPublicProfileError::QueryError(e.to_string()))?;

        self.enrich(&mut content.posts, viewer).await;
        self.enrich(&mut content.saved_posts, viewer).await;

        Ok(PublicProfileView {
            user: UserView::from(&user),
            posts: content.posts,
            comments: content.comments,
            saved_posts: content.saved_posts,
            vote_count: content.vote_count,
            report_count: content.report_count,
        })
    }
}
