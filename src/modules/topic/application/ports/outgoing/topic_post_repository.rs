use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Posts linked and unlinked by one sync.
#[derive(Debug, Clone, Default, PartialEq, Serialize, utoipa::ToSchema)]
pub struct SyncOutcome {
    pub attached: Vec<Uuid>,
    pub detached: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopicPostRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Unknown posts: {0:?}")]
    PostsNotFound(Vec<Uuid>),
}

/// Manages the `posts_topics` link table.
#[async_trait]
pub trait TopicPostRepository: Send + Sync {
    /// Replaces the posts linked to a live topic owned by `owner` with exactly
    /// `post_ids`, inside one transaction. Every id must name a live post.
    async fn sync_topic_posts(
        &self,
        owner: UserId,
        topic_id: Uuid,
        post_ids: Vec<Uuid>,
    ) -> Result<SyncOutcome, TopicPostRepositoryError>;
}
