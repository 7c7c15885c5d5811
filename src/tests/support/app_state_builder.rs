use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::use_cases::{
    fetch_current_user::IFetchCurrentUserUseCase, fetch_public_profile::IFetchPublicProfileUseCase,
    login_user::ILoginUserUseCase, logout_user::ILogoutUserUseCase,
    register_user::IRegisterUserUseCase, resend_verification::IResendVerificationUseCase,
    update_profile::IUpdateProfileUseCase, verify_email::IVerifyEmailUseCase,
};
use crate::modules::comment::application::services::{
    create_comment::ICreateCommentUseCase, delete_comment::IDeleteCommentUseCase,
    fetch_comment::IFetchCommentUseCase, list_comments::IListCommentsUseCase,
};
use crate::modules::notification::application::services::IManageNotificationsUseCase;
use crate::modules::post::application::services::{
    bookmark_post::IBookmarkPostUseCase, create_post::ICreatePostUseCase,
    delete_post::IDeletePostUseCase, fetch_post::IFetchPostUseCase, list_posts::IListPostsUseCase,
};
use crate::modules::report::application::services::{
    create_report::ICreateReportUseCase, fetch_reports::IFetchReportsUseCase,
};
use crate::modules::stats::application::services::stats_service::IStatsUseCase;
use crate::modules::vote::application::services::IApplyVoteUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an [`AppState`] for route tests. Every use case defaults to a
/// stub that panics when called, so a test only wires the use cases the
/// route under test actually reaches.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase>,
    login_user: Arc<dyn ILoginUserUseCase>,
    logout_user: Arc<dyn ILogoutUserUseCase>,
    verify_email: Arc<dyn IVerifyEmailUseCase>,
    resend_verification: Arc<dyn IResendVerificationUseCase>,
    fetch_current_user: Arc<dyn IFetchCurrentUserUseCase>,
    update_profile: Arc<dyn IUpdateProfileUseCase>,
    fetch_public_profile: Arc<dyn IFetchPublicProfileUseCase>,
    create_post: Arc<dyn ICreatePostUseCase>,
    list_posts: Arc<dyn IListPostsUseCase>,
    fetch_post: Arc<dyn IFetchPostUseCase>,
    delete_post: Arc<dyn IDeletePostUseCase>,
    bookmark_post: Arc<dyn IBookmarkPostUseCase>,
    create_comment: Arc<dyn ICreateCommentUseCase>,
    list_comments: Arc<dyn IListCommentsUseCase>,
    fetch_comment: Arc<dyn IFetchCommentUseCase>,
    delete_comment: Arc<dyn IDeleteCommentUseCase>,
    apply_vote: Arc<dyn IApplyVoteUseCase>,
    manage_notifications: Arc<dyn IManageNotificationsUseCase>,
    create_report: Arc<dyn ICreateReportUseCase>,
    fetch_reports: Arc<dyn IFetchReportsUseCase>,
    stats: Arc<dyn IStatsUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            verify_email: Arc::new(StubVerifyEmailUseCase),
            resend_verification: Arc::new(StubResendVerificationUseCase),
            fetch_current_user: Arc::new(StubFetchCurrentUserUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            fetch_public_profile: Arc::new(StubFetchPublicProfileUseCase),
            create_post: Arc::new(StubCreatePostUseCase),
            list_posts: Arc::new(StubListPostsUseCase),
            fetch_post: Arc::new(StubFetchPostUseCase),
            delete_post: Arc::new(StubDeletePostUseCase),
            bookmark_post: Arc::new(StubBookmarkPostUseCase),
            create_comment: Arc::new(StubCreateCommentUseCase),
            list_comments: Arc::new(StubListCommentsUseCase),
            fetch_comment: Arc::new(StubFetchCommentUseCase),
            delete_comment: Arc::new(StubDeleteCommentUseCase),
            apply_vote: Arc::new(StubApplyVoteUseCase),
            manage_notifications: Arc::new(StubManageNotificationsUseCase),
            create_report: Arc::new(StubCreateReportUseCase),
            fetch_reports: Arc::new(StubFetchReportsUseCase),
            stats: Arc::new(StubStatsUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl IRegisterUserUseCase + 'static) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUserUseCase + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_verify_email(mut self, uc: impl IVerifyEmailUseCase + 'static) -> Self {
        self.verify_email = Arc::new(uc);
        self
    }

    pub fn with_resend_verification(
        mut self,
        uc: impl IResendVerificationUseCase + 'static,
    ) -> Self {
        self.resend_verification = Arc::new(uc);
        self
    }

    pub fn with_fetch_current_user(mut self, uc: impl IFetchCurrentUserUseCase + 'static) -> Self {
        self.fetch_current_user = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl IUpdateProfileUseCase + 'static) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_fetch_public_profile(
        mut self,
        uc: impl IFetchPublicProfileUseCase + 'static,
    ) -> Self {
        self.fetch_public_profile = Arc::new(uc);
        self
    }

    pub fn with_create_post(mut self, uc: impl ICreatePostUseCase + 'static) -> Self {
        self.create_post = Arc::new(uc);
        self
    }

    pub fn with_list_posts(mut self, uc: impl IListPostsUseCase + 'static) -> Self {
        self.list_posts = Arc::new(uc);
        self
    }

    pub fn with_fetch_post(mut self, uc: impl IFetchPostUseCase + 'static) -> Self {
        self.fetch_post = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl IDeletePostUseCase + 'static) -> Self {
        self.delete_post = Arc::new(uc);
        self
    }

    pub fn with_bookmark_post(mut self, uc: impl IBookmarkPostUseCase + 'static) -> Self {
        self.bookmark_post = Arc::new(uc);
        self
    }

    pub fn with_create_comment(mut self, uc: impl ICreateCommentUseCase + 'static) -> Self {
        self.create_comment = Arc::new(uc);
        self
    }

    pub fn with_list_comments(mut self, uc: impl IListCommentsUseCase + 'static) -> Self {
        self.list_comments = Arc::new(uc);
        self
    }

    pub fn with_fetch_comment(mut self, uc: impl IFetchCommentUseCase + 'static) -> Self {
        self.fetch_comment = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(mut self, uc: impl IDeleteCommentUseCase + 'static) -> Self {
        self.delete_comment = Arc::new(uc);
        self
    }

    pub fn with_apply_vote(mut self, uc: impl IApplyVoteUseCase + 'static) -> Self {
        self.apply_vote = Arc::new(uc);
        self
    }

    pub fn with_manage_notifications(
        mut self,
        uc: impl IManageNotificationsUseCase + 'static,
    ) -> Self {
        self.manage_notifications = Arc::new(uc);
        self
    }

    pub fn with_create_report(mut self, uc: impl ICreateReportUseCase + 'static) -> Self {
        self.create_report = Arc::new(uc);
        self
    }

    pub fn with_fetch_reports(mut self, uc: impl IFetchReportsUseCase + 'static) -> Self {
        self.fetch_reports = Arc::new(uc);
        self
    }

    pub fn with_stats(mut self, uc: impl IStatsUseCase + 'static) -> Self {
        self.stats = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            verify_email_use_case: self.verify_email,
            resend_verification_use_case: self.resend_verification,
            fetch_current_user_use_case: self.fetch_current_user,
            update_profile_use_case: self.update_profile,
            fetch_public_profile_use_case: self.fetch_public_profile,
            create_post_use_case: self.create_post,
            list_posts_use_case: self.list_posts,
            fetch_post_use_case: self.fetch_post,
            delete_post_use_case: self.delete_post,
            bookmark_post_use_case: self.bookmark_post,
            create_comment_use_case: self.create_comment,
            list_comments_use_case: self.list_comments,
            fetch_comment_use_case: self.fetch_comment,
            delete_comment_use_case: self.delete_comment,
            apply_vote_use_case: self.apply_vote,
            manage_notifications_use_case: self.manage_notifications,
            create_report_use_case: self.create_report,
            fetch_reports_use_case: self.fetch_reports,
            stats_use_case: self.stats,
        })
    }
}
