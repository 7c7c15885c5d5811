use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthorSummary;
use crate::modules::vote::application::domain::entities::VoteSummary;

pub const MAX_TAGS_PER_POST: usize = 5;
pub const EXCERPT_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Excerpt shown on list pages. Truncation happens on char boundaries so
/// multi-byte content never splits mid-codepoint.
pub fn excerpt_of(content: &str) -> String {
    let mut taken: String = content.chars().take(EXCERPT_LENGTH).collect();
    if content.chars().count() > EXCERPT_LENGTH {
        taken.push_str("...");
    }
    taken
}

/// List/detail projection with everything the feed needs resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub excerpt: String,
    pub author: AuthorSummary,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub votes: VoteSummary,
    pub comment_count: u64,
    pub is_bookmarked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSort {
    Newest,
    Popular,
}

impl PostSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(PostSort::Newest),
            "popular" => Some(PostSort::Popular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostFilter {
    pub search: Option<String>,
    pub tags: Vec<String>,
    pub sort: PostSort,
    pub page: u64,
    pub per_page: u64,
}

impl Default for PostFilter {
    fn default() -> Self {
        Self {
            search: None,
            tags: Vec::new(),
            sort: PostSort::Newest,
            page: 1,
            per_page: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };
        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}
