pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::{
    Argon2Hasher, ProfileContentPostgres, RedisTokenBlacklist, UserQueryPostgres,
    UserRepositoryPostgres,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenBlacklistRepository, TokenProvider, UserQuery,
};
use crate::modules::auth::application::use_cases::{
    fetch_current_user::{FetchCurrentUserService, IFetchCurrentUserUseCase},
    fetch_public_profile::{FetchPublicProfileService, IFetchPublicProfileUseCase},
    login_user::{ILoginUserUseCase, LoginUserService},
    logout_user::{ILogoutUserUseCase, LogoutUserService},
    register_user::{IRegisterUserUseCase, RegisterUserService},
    resend_verification::{IResendVerificationUseCase, ResendVerificationService},
    update_profile::{IUpdateProfileUseCase, UpdateProfileService},
    verify_email::{IVerifyEmailUseCase, VerifyEmailService},
};
use crate::modules::comment::adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres};
use crate::modules::comment::application::ports::incoming::ICommentTreeUseCase;
use crate::modules::comment::application::services::{
    create_comment::{CreateCommentService, ICreateCommentUseCase},
    delete_comment::{DeleteCommentService, IDeleteCommentUseCase},
    fetch_comment::{FetchCommentService, IFetchCommentUseCase},
    list_comments::{IListCommentsUseCase, ListCommentsService},
};
use crate::modules::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::{EmailSender, UserEmailNotifier};
use crate::modules::email::application::services::UserEmailService;
use crate::modules::notification::adapter::outgoing::NotificationRepositoryPostgres;
use crate::modules::notification::application::ports::incoming::INotifyUseCase;
use crate::modules::notification::application::services::{
    manage_notifications::{IManageNotificationsUseCase, ManageNotificationsService},
    notify::NotifyService,
};
use crate::modules::post::adapter::outgoing::{
    BookmarkRepositoryPostgres, PostQueryPostgres, PostRepositoryPostgres,
};
use crate::modules::post::application::ports::outgoing::PostQuery;
use crate::modules::post::application::services::{
    bookmark_post::{BookmarkPostService, IBookmarkPostUseCase},
    create_post::{CreatePostService, ICreatePostUseCase},
    delete_post::{DeletePostService, IDeletePostUseCase},
    fetch_post::{FetchPostService, IFetchPostUseCase},
    list_posts::{IListPostsUseCase, ListPostsService},
};
use crate::modules::report::adapter::outgoing::ReportRepositoryPostgres;
use crate::modules::report::application::services::{
    create_report::{CreateReportService, ICreateReportUseCase},
    fetch_reports::{FetchReportsService, IFetchReportsUseCase},
};
use crate::modules::stats::adapter::outgoing::StatsQueryPostgres;
use crate::modules::stats::application::services::stats_service::{IStatsUseCase, StatsService};
use crate::modules::vote::adapter::outgoing::{VoteAggregatorPostgres, VoteLedgerPostgres};
use crate::modules::vote::application::ports::outgoing::VoteAggregator;
use crate::modules::vote::application::services::apply_vote::{
    ApplyVoteService, IApplyVoteUseCase,
};
use crate::shared::api::custom_json_config;
use crate::shared::realtime::{BroadcastEventBus, EventBus};

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase>,
    pub logout_user_use_case: Arc<dyn ILogoutUserUseCase>,
    pub verify_email_use_case: Arc<dyn IVerifyEmailUseCase>,
    pub resend_verification_use_case: Arc<dyn IResendVerificationUseCase>,
    pub fetch_current_user_use_case: Arc<dyn IFetchCurrentUserUseCase>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase>,
    pub fetch_public_profile_use_case: Arc<dyn IFetchPublicProfileUseCase>,
    pub create_post_use_case: Arc<dyn ICreatePostUseCase>,
    pub list_posts_use_case: Arc<dyn IListPostsUseCase>,
    pub fetch_post_use_case: Arc<dyn IFetchPostUseCase>,
    pub delete_post_use_case: Arc<dyn IDeletePostUseCase>,
    pub bookmark_post_use_case: Arc<dyn IBookmarkPostUseCase>,
    pub create_comment_use_case: Arc<dyn ICreateCommentUseCase>,
    pub list_comments_use_case: Arc<dyn IListCommentsUseCase>,
    pub fetch_comment_use_case: Arc<dyn IFetchCommentUseCase>,
    pub delete_comment_use_case: Arc<dyn IDeleteCommentUseCase>,
    pub apply_vote_use_case: Arc<dyn IApplyVoteUseCase>,
    pub manage_notifications_use_case: Arc<dyn IManageNotificationsUseCase>,
    pub create_report_use_case: Arc<dyn ICreateReportUseCase>,
    pub fetch_reports_use_case: Arc<dyn IFetchReportsUseCase>,
    pub stats_use_case: Arc<dyn IStatsUseCase>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set");
    let server_url = format!("{host}:{port}");

    // SMTP transport: a local catcher in test, a real relay elsewhere
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if env_name == "test" {
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");
        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");
        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("SMTP relay setup failed")
    };

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(
        Database::connect(opt)
            .await
            .expect("Failed to connect to database"),
    );

    // rediss:// URLs need a process-wide crypto provider before any
    // TLS connection is opened.
    rustls::crypto::ring::default_provider()
        .install_default()
        .ok();

    // A dedicated managed connection for the readiness probe; the token
    // blacklist opens its own connections.
    let redis_client = redis::Client::open(redis_url.as_str()).expect("Invalid REDIS_URL");
    let redis_manager = Arc::new(Mutex::new(
        redis::aio::ConnectionManager::new(redis_client)
            .await
            .expect("Failed to connect to Redis"),
    ));

    // Shared infrastructure
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let token_blacklist: Arc<dyn TokenBlacklistRepository> = Arc::new(
        RedisTokenBlacklist::new(&redis_url).expect("Failed to set up the token blacklist"),
    );
    let password_hasher: Arc<dyn PasswordHasher> =
        Arc::new(Argon2Hasher::new().expect("Argon2 setup failed"));
    let event_bus_impl = Arc::new(BroadcastEventBus::new());
    let event_bus: Arc<dyn EventBus> = event_bus_impl.clone();

    let email_sender: Arc<dyn EmailSender> = Arc::new(smtp_sender);
    let app_url = env::var("APP_URL").unwrap_or_else(|_| format!("http://{server_url}"));
    let email_notifier: Arc<dyn UserEmailNotifier> =
        Arc::new(UserEmailService::new(email_sender, app_url));

    // Outgoing adapters
    let user_query = UserQueryPostgres::new(db.clone());
    let user_query_arc: Arc<dyn UserQuery> = Arc::new(user_query.clone());
    let user_repo = UserRepositoryPostgres::new(db.clone());
    let profile_content = ProfileContentPostgres::new(db.clone());
    let post_query = PostQueryPostgres::new(db.clone());
    let post_query_arc: Arc<dyn PostQuery> = Arc::new(post_query.clone());
    let post_repo = PostRepositoryPostgres::new(db.clone());
    let bookmark_repo = BookmarkRepositoryPostgres::new(db.clone());
    let comment_query = CommentQueryPostgres::new(db.clone());
    let comment_repo = CommentRepositoryPostgres::new(db.clone());
    let vote_ledger = VoteLedgerPostgres::new(db.clone());
    let vote_aggregator: Arc<dyn VoteAggregator> = Arc::new(VoteAggregatorPostgres::new(db.clone()));
    let notification_repo = NotificationRepositoryPostgres::new(db.clone());
    let report_repo = ReportRepositoryPostgres::new(db.clone());
    let stats_query = StatsQueryPostgres::new(db.clone());

    // Notifications first, several modules publish through them
    let notifier: Arc<dyn INotifyUseCase> = Arc::new(NotifyService::new(
        notification_repo.clone(),
        event_bus.clone(),
    ));

    let list_comments = Arc::new(ListCommentsService::new(
        comment_query.clone(),
        vote_aggregator.clone(),
    ));
    let comment_tree: Arc<dyn ICommentTreeUseCase> = list_comments.clone();

    let state = AppState {
        register_user_use_case: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            password_hasher.clone(),
            email_notifier.clone(),
        )),
        login_user_use_case: Arc::new(LoginUserService::new(
            user_query.clone(),
            password_hasher,
            token_provider.clone(),
        )),
        logout_user_use_case: Arc::new(LogoutUserService::new(
            token_provider.clone(),
            token_blacklist.clone(),
        )),
        verify_email_use_case: Arc::new(VerifyEmailService::new(
            user_query.clone(),
            user_repo.clone(),
        )),
        resend_verification_use_case: Arc::new(ResendVerificationService::new(
            user_query.clone(),
            user_repo.clone(),
            email_notifier,
        )),
        fetch_current_user_use_case: Arc::new(FetchCurrentUserService::new(user_query.clone())),
        update_profile_use_case: Arc::new(UpdateProfileService::new(
            user_query.clone(),
            user_repo,
            event_bus.clone(),
        )),
        fetch_public_profile_use_case: Arc::new(FetchPublicProfileService::new(
            user_query,
            Arc::new(profile_content),
            vote_aggregator.clone(),
        )),
        create_post_use_case: Arc::new(CreatePostService::new(
            post_repo.clone(),
            user_query_arc.clone(),
            event_bus.clone(),
        )),
        list_posts_use_case: Arc::new(ListPostsService::new(
            post_query.clone(),
            vote_aggregator.clone(),
        )),
        fetch_post_use_case: Arc::new(FetchPostService::new(
            post_query.clone(),
            vote_aggregator.clone(),
            comment_tree,
        )),
        delete_post_use_case: Arc::new(DeletePostService::new(
            post_query.clone(),
            post_repo,
            event_bus.clone(),
        )),
        bookmark_post_use_case: Arc::new(BookmarkPostService::new(
            post_query.clone(),
            bookmark_repo,
            user_query_arc.clone(),
            notifier.clone(),
            event_bus.clone(),
        )),
        create_comment_use_case: Arc::new(CreateCommentService::new(
            comment_query.clone(),
            comment_repo.clone(),
            post_query_arc,
            user_query_arc.clone(),
            notifier.clone(),
            event_bus.clone(),
        )),
        list_comments_use_case: list_comments,
        fetch_comment_use_case: Arc::new(FetchCommentService::new(
            comment_query.clone(),
            vote_aggregator,
        )),
        delete_comment_use_case: Arc::new(DeleteCommentService::new(
            comment_query,
            comment_repo,
            event_bus.clone(),
        )),
        apply_vote_use_case: Arc::new(ApplyVoteService::new(
            vote_ledger,
            user_query_arc.clone(),
            notifier,
            event_bus.clone(),
        )),
        manage_notifications_use_case: Arc::new(ManageNotificationsService::new(
            notification_repo,
        )),
        create_report_use_case: Arc::new(CreateReportService::new(
            report_repo.clone(),
            user_query_arc,
            event_bus,
        )),
        fetch_reports_use_case: Arc::new(FetchReportsService::new(report_repo)),
        stats_use_case: Arc::new(StatsService::new(stats_query)),
    };

    info!("Listening on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_provider.clone()))
            .app_data(web::Data::new(token_blacklist.clone()))
            .app_data(web::Data::new(event_bus_impl.clone()))
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(redis_manager.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth and profiles
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::verify_email_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::resend_verification_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::current_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::public_profile_handler);
    // Posts
    cfg.service(crate::modules::post::adapter::incoming::web::routes::list_posts_handler);
    cfg.service(crate::modules::post::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::modules::post::adapter::incoming::web::routes::fetch_post_handler);
    cfg.service(crate::modules::post::adapter::incoming::web::routes::delete_post_handler);
    cfg.service(crate::modules::post::adapter::incoming::web::routes::save_post_handler);
    cfg.service(crate::modules::post::adapter::incoming::web::routes::unsave_post_handler);
    // Comments
    cfg.service(crate::modules::comment::adapter::incoming::web::routes::list_comments_handler);
    cfg.service(crate::modules::comment::adapter::incoming::web::routes::create_comment_handler);
    cfg.service(crate::modules::comment::adapter::incoming::web::routes::fetch_comment_handler);
    cfg.service(crate::modules::comment::adapter::incoming::web::routes::delete_comment_handler);
    // Votes
    cfg.service(crate::modules::vote::adapter::incoming::web::routes::vote_post_handler);
    cfg.service(crate::modules::vote::adapter::incoming::web::routes::vote_comment_handler);
    // Notifications
    cfg.service(
        crate::modules::notification::adapter::incoming::web::routes::list_notifications_handler,
    );
    cfg.service(crate::modules::notification::adapter::incoming::web::routes::unread_count_handler);
    cfg.service(crate::modules::notification::adapter::incoming::web::routes::mark_read_handler);
    cfg.service(
        crate::modules::notification::adapter::incoming::web::routes::mark_all_read_handler,
    );
    cfg.service(
        crate::modules::notification::adapter::incoming::web::routes::delete_notification_handler,
    );
    cfg.service(
        crate::modules::notification::adapter::incoming::web::routes::delete_all_notifications_handler,
    );
    // Reports
    cfg.service(crate::modules::report::adapter::incoming::web::routes::create_report_handler);
    cfg.service(crate::modules::report::adapter::incoming::web::routes::list_reports_handler);
    cfg.service(crate::modules::report::adapter::incoming::web::routes::fetch_report_handler);
    // Stats
    cfg.service(crate::modules::stats::adapter::incoming::web::routes::community_stats_handler);
    cfg.service(crate::modules::stats::adapter::incoming::web::routes::popular_tags_handler);
    cfg.service(crate::modules::stats::adapter::incoming::web::routes::recent_activity_handler);
    // Realtime
    cfg.service(crate::shared::realtime::ws_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
