use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SoftDeletePostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SoftDeletePostUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, post_id: Uuid) -> Result<(), SoftDeletePostError>;
}
