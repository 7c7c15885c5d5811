use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::stats::application::services::stats_service::StatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 50;

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

impl LimitQuery {
    fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

fn map_stats_error(error: StatsError) -> HttpResponse {
    match error {
        StatsError::QueryError(e) => {
            tracing::error!("Stats query failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/stats/community")]
pub async fn community_stats_handler(data: web::Data<AppState>) -> impl Responder {
    match data.stats_use_case.community_stats().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => map_stats_error(e),
    }
}

#[get("/api/stats/popular-tags")]
pub async fn popular_tags_handler(
    query: web::Query<LimitQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.stats_use_case.popular_tags(query.limit()).await {
        Ok(tags) => ApiResponse::success(tags),
        Err(e) => map_stats_error(e),
    }
}

#[get("/api/stats/recent-activity")]
pub async fn recent_activity_handler(
    query: web::Query<LimitQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.stats_use_case.recent_activity(query.limit()).await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => map_stats_error(e),
    }
}
