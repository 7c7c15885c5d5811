use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::notification::application::domain::entities::NotificationType;
use crate::modules::notification::application::ports::incoming::{
    INotifyUseCase, NotifyCommand,
};
use crate::modules::post::application::ports::outgoing::{BookmarkRepository, PostQuery};
use crate::shared::realtime::{EventBus, ForumEvent};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookmarkError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookmarkResult {
    /// False when the operation found nothing to change.
    pub changed: bool,
    pub bookmarked: bool,
}

#[async_trait]
pub trait IBookmarkPostUseCase: Send + Sync {
    async fn save(&self, user_id: Uuid, post_id: Uuid) -> Result<BookmarkResult, BookmarkError>;
    async fn unsave(&self, user_id: Uuid, post_id: Uuid)
        -> Result<BookmarkResult, BookmarkError>;
}

pub struct BookmarkPostService<Q, R>
where
    Q: PostQuery,
    R: BookmarkRepository,
{
    query: Q,
    repository: R,
    users: Arc<dyn UserQuery>,
    notifier: Arc<dyn INotifyUseCase>,
    event_bus: Arc<dyn EventBus>,
}

impl<Q, R> BookmarkPostService<Q, R>
where
    Q: PostQuery,
    R: BookmarkRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        users: Arc<dyn UserQuery>,
        notifier: Arc<dyn INotifyUseCase>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            query,
            repository,
            users,
            notifier,
            event_bus,
        }
    }

    /// The bookmark row is already committed; notification problems are
    /// logged and dropped.
    async fn notify_author(&self, user_id: Uuid, post_id: Uuid, author_id: Uuid) {
        let saver_name = match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => user.username,
            Ok(None) => "Someone".to_string(),
            Err(e) => {
                tracing::warn!("Could not resolve user {} for notification: {}", user_id, e);
                return;
            }
        };

        let command = NotifyCommand {
            notification_type: NotificationType::PostSaved,
            recipient_id: author_id,
            triggerer_id: Some(user_id),
            message: format!("{} saved your post", saver_name),
            post_id: Some(post_id),
            comment_id: None,
        };

        if let Err(e) = self.notifier.execute(command).await {
            tracing::warn!("Bookmark notification failed for post {}: {}", post_id, e);
        }
    }
}

#[async_trait]
impl<Q, R> IBookmarkPostUseCase for BookmarkPostService<Q, R>
where
    Q: PostQuery,
    R: BookmarkRepository,
{
    async fn save(&self, user_id: Uuid, post_id: Uuid) -> Result<BookmarkResult, BookmarkError> {
        let post = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| BookmarkError::RepositoryError(e.to_string()))?
            .ok_or(BookmarkError::PostNotFound)?;

        let created = self
            .repository
            .save(user_id, post_id)
            .await
            .map_err(|e| BookmarkError::RepositoryError(e.to_string()))?;

        if created {
            self.event_bus.publish(ForumEvent::global(
                "postBookmarked",
                serde_json::json!({ "postId": post_id, "userId": user_id }),
            ));
            self.notify_author(user_id, post_id, post.author_id).await;
        }

        Ok(BookmarkResult {
            changed: created,
            bookmarked: true,
        })
    }

    async fn unsave(
        &self,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<BookmarkResult, BookmarkError> {
        self.query
            .find_by_id(post_id)
            .await
            .map_err(|e| BookmarkError::RepositoryError(e.to_string()))?
            .ok_or(BookmarkError::PostNotFound)?;

        let removed = self
            .repository
            .unsave(user_id, post_id)
            .await
            .map_err(|e| BookmarkError::RepositoryError(e.to_string()))?;

        if removed {
            self.event_bus.publish(ForumEvent::global(
                "postUnbookmarked",
                serde_json::json!({ "postId": post_id, "userId": user_id }),
            ));
        }

        Ok(BookmarkResult {
            changed: removed,
            bookmarked: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::AuthorSummary;
    use crate::modules::auth::application::use_cases::test_support::{
        sample_user, StubUserQuery,
    };
    use crate::modules::notification::application::domain::entities::NotificationView;
    use crate::modules::notification::application::ports::incoming::NotifyError;
    use crate::modules::post::application::domain::entities::{Post, PostFilter};
    use crate::modules::post::application::ports::outgoing::{
        BookmarkRepositoryError, PostQueryError,
    };
    use chrono::Utc;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    struct SinglePostQuery {
        post: Option<Post>,
    }

    #[async_trait]
    impl PostQuery for SinglePostQuery {
        async fn find_by_id(&self, _post_id: Uuid) -> Result<Option<Post>, PostQueryError> {
            Ok(self.post.clone())
        }

        async fn list(&self, _filter: &PostFilter) -> Result<(Vec<Post>, u64), PostQueryError> {
            unimplemented!()
        }

        async fn authors(
            &self,
            _author_ids: &[Uuid],
        ) -> Result<HashMap<Uuid, AuthorSummary>, PostQueryError> {
            unimplemented!()
        }

        async fn tags_for(
            &self,
            _post_ids: &[Uuid],
        ) -> Result<HashMap<Uuid, Vec<String>>, PostQueryError> {
            unimplemented!()
        }

        async fn comment_counts(
            &self,
            _post_ids: &[Uuid],
        ) -> Result<HashMap<Uuid, u64>, PostQueryError> {
            unimplemented!()
        }

        async fn bookmarked_among(
            &self,
            _viewer: Uuid,
            _post_ids: &[Uuid],
        ) -> Result<HashSet<Uuid>, PostQueryError> {
            unimplemented!()
        }
    }

    struct StubBookmarks {
        save_result: bool,
        unsave_result: bool,
    }

    #[async_trait]
    impl BookmarkRepository for StubBookmarks {
        async fn save(
            &self,
            _user_id: Uuid,
            _post_id: Uuid,
        ) -> Result<bool, BookmarkRepositoryError> {
            Ok(self.save_result)
        }

        async fn unsave(
            &self,
            _user_id: Uuid,
            _post_id: Uuid,
        ) -> Result<bool, BookmarkRepositoryError> {
            Ok(self.unsave_result)
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        commands: Mutex<Vec<NotifyCommand>>,
    }

    #[async_trait]
    impl INotifyUseCase for RecordingNotifier {
        async fn execute(
            &self,
            command: NotifyCommand,
        ) -> Result<Option<NotificationView>, NotifyError> {
            self.commands.lock().unwrap().push(command);
            Ok(None)
        }
    }

    #[derive(Default)]
    struct RecordingEventBus {
        events: Mutex<Vec<ForumEvent>>,
    }

    impl EventBus for RecordingEventBus {
        fn publish(&self, event: ForumEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn post_by(author_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: "A post".to_string(),
            content: "Full content of the post".to_string(),
            excerpt: "Full content of the post".to_string(),
            author_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service_with(
        post: Option<Post>,
        save_result: bool,
        unsave_result: bool,
    ) -> (
        BookmarkPostService<SinglePostQuery, StubBookmarks>,
        Arc<RecordingNotifier>,
        Arc<RecordingEventBus>,
    ) {
        let notifier = Arc::new(RecordingNotifier::default());
        let bus = Arc::new(RecordingEventBus::default());
        let service = BookmarkPostService::new(
            SinglePostQuery { post },
            StubBookmarks {
                save_result,
                unsave_result,
            },
            Arc::new(StubUserQuery::with_users(vec![sample_user(
                "alice",
                "alice@example.com",
            )])),
            notifier.clone(),
            bus.clone(),
        );
        (service, notifier, bus)
    }

    #[tokio::test]
    async fn test_new_bookmark_notifies_and_broadcasts() {
        let author_id = Uuid::new_v4();
        let post = post_by(author_id);
        let post_id = post.id;
        let (service, notifier, bus) = service_with(Some(post), true, false);

        let user = sample_user("alice", "alice@example.com");
        let result = service.save(user.id, post_id).await.unwrap();

        assert!(result.changed);
        assert!(result.bookmarked);
        assert_eq!(bus.events.lock().unwrap()[0].name, "postBookmarked");

        let commands = notifier.commands.lock().unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].recipient_id, author_id);
        assert_eq!(commands[0].notification_type, NotificationType::PostSaved);
    }

    #[tokio::test]
    async fn test_duplicate_bookmark_is_silent() {
        let post = post_by(Uuid::new_v4());
        let post_id = post.id;
        let (service, notifier, bus) = service_with(Some(post), false, false);

        let result = service.save(Uuid::new_v4(), post_id).await.unwrap();

        assert!(!result.changed);
        assert!(result.bookmarked);
        assert!(bus.events.lock().unwrap().is_empty());
        assert!(notifier.commands.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unsave_broadcasts_only_when_removed() {
        let post = post_by(Uuid::new_v4());
        let post_id = post.id;
        let (service, _, bus) = service_with(Some(post), false, true);

        let result = service.unsave(Uuid::new_v4(), post_id).await.unwrap();

        assert!(result.changed);
        assert!(!result.bookmarked);
        assert_eq!(bus.events.lock().unwrap()[0].name, "postUnbookmarked");
    }

    #[tokio::test]
    async fn test_unknown_post_is_not_found() {
        let (service, _, _) = service_with(None, true, true);
        let result = service.save(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(BookmarkError::PostNotFound)));
    }
}
