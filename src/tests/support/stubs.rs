use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, UserView};
use crate::modules::auth::application::use_cases::fetch_current_user::{
    FetchCurrentUserError, IFetchCurrentUserUseCase,
};
use crate::modules::auth::application::use_cases::fetch_public_profile::{
    FetchPublicProfileError, IFetchPublicProfileUseCase, PublicProfileView,
};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginOutput,
};
use crate::modules::auth::application::use_cases::logout_user::{ILogoutUserUseCase, LogoutError};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserCommand, RegisterUserError,
};
use crate::modules::auth::application::use_cases::resend_verification::{
    IResendVerificationUseCase, ResendVerificationError,
};
use crate::modules::auth::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileCommand, UpdateProfileError,
};
use crate::modules::auth::application::use_cases::verify_email::{
    IVerifyEmailUseCase, VerifyEmailError,
};
use crate::modules::comment::application::domain::entities::CommentView;
use crate::modules::comment::application::services::create_comment::{
    CreateCommentCommand, CreateCommentError, ICreateCommentUseCase,
};
use crate::modules::comment::application::services::delete_comment::{
    DeleteCommentError, IDeleteCommentUseCase,
};
use crate::modules::comment::application::services::fetch_comment::{
    FetchCommentError, IFetchCommentUseCase,
};
use crate::modules::comment::application::services::list_comments::{
    IListCommentsUseCase, ListCommentsError,
};
use crate::modules::notification::application::domain::entities::NotificationView;
use crate::modules::notification::application::services::{
    IManageNotificationsUseCase, ManageNotificationError,
};
use crate::modules::post::application::domain::entities::{Paginated, PostFilter, PostView};
use crate::modules::post::application::services::bookmark_post::{
    BookmarkError, BookmarkResult, IBookmarkPostUseCase,
};
use crate::modules::post::application::services::create_post::{
    CreatePostCommand, CreatePostError, ICreatePostUseCase,
};
use crate::modules::post::application::services::delete_post::{
    DeletePostError, IDeletePostUseCase,
};
use crate::modules::post::application::services::fetch_post::{
    FetchPostError, IFetchPostUseCase, PostDetailView,
};
use crate::modules::post::application::services::list_posts::{IListPostsUseCase, ListPostsError};
use crate::modules::report::application::domain::entities::ReportView;
use crate::modules::report::application::services::create_report::{
    CreateReportCommand, CreateReportError, ICreateReportUseCase,
};
use crate::modules::report::application::services::fetch_reports::{
    FetchReportsError, IFetchReportsUseCase,
};
use crate::modules::stats::application::domain::entities::{
    ActivityItem, CommunityStats, PopularTag,
};
use crate::modules::stats::application::services::stats_service::{IStatsUseCase, StatsError};
use crate::modules::vote::application::domain::entities::{VoteAction, VoteTarget};
use crate::modules::vote::application::services::{
    ApplyVoteError, ApplyVoteResult, IApplyVoteUseCase,
};

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<UserView, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _email: &str, _password: &str) -> Result<LoginOutput, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUserUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _token: &str) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyEmailUseCase;

#[async_trait]
impl IVerifyEmailUseCase for StubVerifyEmailUseCase {
    async fn execute(&self, _email: &str, _token: &str) -> Result<(), VerifyEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResendVerificationUseCase;

#[async_trait]
impl IResendVerificationUseCase for StubResendVerificationUseCase {
    async fn execute(&self, _email: &str) -> Result<(), ResendVerificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchCurrentUserUseCase;

#[async_trait]
impl IFetchCurrentUserUseCase for StubFetchCurrentUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserView, FetchCurrentUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _command: UpdateProfileCommand,
    ) -> Result<UserView, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchPublicProfileUseCase;

#[async_trait]
impl IFetchPublicProfileUseCase for StubFetchPublicProfileUseCase {
    async fn execute(
        &self,
        _username: &str,
        _viewer: Option<Uuid>,
    ) -> Result<PublicProfileView, FetchPublicProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreatePostUseCase;

#[async_trait]
impl ICreatePostUseCase for StubCreatePostUseCase {
    async fn execute(
        &self,
        _author_id: Uuid,
        _command: CreatePostCommand,
    ) -> Result<PostView, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPostsUseCase;

#[async_trait]
impl IListPostsUseCase for StubListPostsUseCase {
    async fn execute(
        &self,
        _filter: PostFilter,
        _viewer: Option<Uuid>,
    ) -> Result<Paginated<PostView>, ListPostsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchPostUseCase;

#[async_trait]
impl IFetchPostUseCase for StubFetchPostUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _viewer: Option<Uuid>,
    ) -> Result<PostDetailView, FetchPostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePostUseCase;

#[async_trait]
impl IDeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _user_id: Uuid, _post_id: Uuid) -> Result<(), DeletePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubBookmarkPostUseCase;

#[async_trait]
impl IBookmarkPostUseCase for StubBookmarkPostUseCase {
    async fn save(&self, _user_id: Uuid, _post_id: Uuid) -> Result<BookmarkResult, BookmarkError> {
        unimplemented!("Not used in this test")
    }

    async fn unsave(
        &self,
        _user_id: Uuid,
        _post_id: Uuid,
    ) -> Result<BookmarkResult, BookmarkError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCommentUseCase;

#[async_trait]
impl ICreateCommentUseCase for StubCreateCommentUseCase {
    async fn execute(
        &self,
        _author_id: Uuid,
        _command: CreateCommentCommand,
    ) -> Result<CommentView, CreateCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListCommentsUseCase;

#[async_trait]
impl IListCommentsUseCase for StubListCommentsUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _page: u64,
        _per_page: u64,
        _viewer: Option<Uuid>,
    ) -> Result<Paginated<CommentView>, ListCommentsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchCommentUseCase;

#[async_trait]
impl IFetchCommentUseCase for StubFetchCommentUseCase {
    async fn execute(
        &self,
        _comment_id: Uuid,
        _viewer: Option<Uuid>,
    ) -> Result<CommentView, FetchCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCommentUseCase;

#[async_trait]
impl IDeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(&self, _user_id: Uuid, _comment_id: Uuid) -> Result<(), DeleteCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubApplyVoteUseCase;

#[async_trait]
impl IApplyVoteUseCase for StubApplyVoteUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _target: VoteTarget,
        _action: VoteAction,
    ) -> Result<ApplyVoteResult, ApplyVoteError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubManageNotificationsUseCase;

#[async_trait]
impl IManageNotificationsUseCase for StubManageNotificationsUseCase {
    async fn list(&self, _caller: Uuid) -> Result<Vec<NotificationView>, ManageNotificationError> {
        unimplemented!("Not used in this test")
    }

    async fn unread_count(&self, _caller: Uuid) -> Result<u64, ManageNotificationError> {
        unimplemented!("Not used in this test")
    }

    async fn mark_read(&self, _caller: Uuid, _id: Uuid) -> Result<(), ManageNotificationError> {
        unimplemented!("Not used in this test")
    }

    async fn mark_all_read(&self, _caller: Uuid) -> Result<(), ManageNotificationError> {
        unimplemented!("Not used in this test")
    }

    async fn delete(&self, _caller: Uuid, _id: Uuid) -> Result<(), ManageNotificationError> {
        unimplemented!("Not used in this test")
    }

    async fn delete_all(&self, _caller: Uuid) -> Result<(), ManageNotificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateReportUseCase;

#[async_trait]
impl ICreateReportUseCase for StubCreateReportUseCase {
    async fn execute(
        &self,
        _reporter_id: Uuid,
        _command: CreateReportCommand,
    ) -> Result<ReportView, CreateReportError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchReportsUseCase;

#[async_trait]
impl IFetchReportsUseCase for StubFetchReportsUseCase {
    async fn list_all(&self, _caller_role: Role) -> Result<Vec<ReportView>, FetchReportsError> {
        unimplemented!("Not used in this test")
    }

    async fn find(
        &self,
        _caller_role: Role,
        _report_id: Uuid,
    ) -> Result<ReportView, FetchReportsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubStatsUseCase;

#[async_trait]
impl IStatsUseCase for StubStatsUseCase {
    async fn community_stats(&self) -> Result<CommunityStats, StatsError> {
        unimplemented!("Not used in this test")
    }

    async fn popular_tags(&self, _limit: u64) -> Result<Vec<PopularTag>, StatsError> {
        unimplemented!("Not used in this test")
    }

    async fn recent_activity(&self, _limit: u64) -> Result<Vec<ActivityItem>, StatsError> {
        unimplemented!("Not used in this test")
    }
}
