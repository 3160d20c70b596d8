use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const DEFAULT_PER_PAGE: u64 = 15;
pub const MAX_PER_PAGE: u64 = 100;

/// Largest row offset Postgres accepts as a BIGINT.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Read-only DTO for a single topic, whatever its state.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicQueryResult {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    pub slug: String,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TopicQueryResult {
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Row of the topic index, with the number of live posts linked to it.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TopicListItem {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[schema(value_type = Uuid)]
    pub user_id: UserId,
    pub posts_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TrashedTopicItem {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[schema(value_type = Uuid)]
    pub user_id: UserId,
    pub deleted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TopicPostItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Missing or zero values fall back to defaults; `per_page` is capped.
    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let per_page = per_page
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PER_PAGE)
            .min(MAX_PER_PAGE);

        Self { page, per_page }
    }

    /// Rows to skip; pages past the end clamp to `MAX_OFFSET` and yield nothing.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.per_page)
            .min(MAX_OFFSET)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Live topics of every owner, newest first.
    async fn list_topics(&self, page: PageRequest) -> Result<Page<TopicListItem>, TopicQueryError>;

    /// Live topic owned by `owner`; `None` covers missing, trashed and foreign topics alike.
    async fn find_owned_topic(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError>;

    /// Topic by id regardless of owner or trash state.
    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<TopicQueryResult>, TopicQueryError>;

    /// Whether a topic other than `except` already uses `slug`, trashed ones included.
    async fn slug_taken(&self, slug: &str, except: Uuid) -> Result<bool, TopicQueryError>;

    async fn list_trashed_topics(
        &self,
        owner: UserId,
    ) -> Result<Vec<TrashedTopicItem>, TopicQueryError>;

    /// Live posts linked to the topic, in link order.
    async fn list_topic_posts(&self, topic_id: Uuid)
        -> Result<Vec<TopicPostItem>, TopicQueryError>;
}
