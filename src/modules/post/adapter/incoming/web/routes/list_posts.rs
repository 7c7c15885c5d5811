use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::modules::post::application::domain::entities::{PostFilter, PostSort};
use crate::modules::post::application::services::list_posts::ListPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub search: Option<String>,
    /// Comma-separated tag names.
    pub tags: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl ListPostsQuery {
    fn into_filter(self) -> Result<PostFilter, HttpResponse> {
        let defaults = PostFilter::default();

        let sort = match self.sort.as_deref() {
            None => defaults.sort,
            Some(value) => PostSort::parse(value).ok_or_else(|| {
                ApiResponse::bad_request("INVALID_SORT", "Sort must be \"newest\" or \"popular\"")
            })?,
        };

        let tags = self
            .tags
            .map(|raw| {
                raw.split(',')
                    .map(|tag| tag.trim().to_lowercase())
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(PostFilter {
            search: self.search.filter(|s| !s.trim().is_empty()),
            tags,
            sort,
            page: self.page.unwrap_or(defaults.page).max(1),
            per_page: self.per_page.unwrap_or(defaults.per_page).clamp(1, 100),
        })
    }
}

#[get("/api/posts")]
pub async fn list_posts_handler(
    viewer: MaybeUser,
    query: web::Query<ListPostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match query.into_inner().into_filter() {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    match data
        .list_posts_use_case
        .execute(filter, viewer.user_id)
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(ListPostsError::QueryError(e)) => {
            tracing::error!("Failed to list posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
