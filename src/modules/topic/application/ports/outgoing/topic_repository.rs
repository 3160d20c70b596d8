use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

// Input DTO for creating a topic under a caller-supplied id
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct UpdateTopicData {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    pub slug: String,
}

// Unified output DTO for every operation that changes a topic
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TopicResult {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[schema(value_type = Uuid)]
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Topic already exists")]
    TopicAlreadyExists,

    #[error("Slug already taken")]
    SlugTaken,
}

/// Write side of the topic store. Every mutation is scoped to the owner and
/// reports `TopicNotFound` when the scoped row does not exist.
#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData)
        -> Result<TopicResult, TopicRepositoryError>;

    /// Updates a live topic owned by `data.owner`.
    async fn update_topic(&self, data: UpdateTopicData)
        -> Result<TopicResult, TopicRepositoryError>;

    async fn soft_delete_topic(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<(), TopicRepositoryError>;

    /// Clears `deleted_at` of a trashed topic owned by `owner`.
    async fn restore_topic(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<TopicResult, TopicRepositoryError>;
}
