use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Post not found")]
    PostNotFound,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Marks a live post owned by `owner` as deleted and removes every topic
    /// link pointing at it, atomically. Returns the number of links removed.
    async fn soft_delete_post(&self, owner: UserId, post_id: Uuid)
        -> Result<u64, PostRepositoryError>;
}
