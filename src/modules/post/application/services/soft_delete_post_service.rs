use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    post::application::ports::{
        incoming::use_cases::{SoftDeletePostError, SoftDeletePostUseCase},
        outgoing::{PostRepository, PostRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct SoftDeletePostService<R>
where
    R: PostRepository,
{
    repository: R,
}

impl<R> SoftDeletePostService<R>
where
    R: PostRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SoftDeletePostUseCase for SoftDeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, post_id: Uuid) -> Result<(), SoftDeletePostError> {
        let detached = self
            .repository
            .soft_delete_post(owner, post_id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::PostNotFound => SoftDeletePostError::PostNotFound,
                PostRepositoryError::DatabaseError(msg) => SoftDeletePostError::DatabaseError(msg),
            })?;

        tracing::info!(%post_id, %owner, detached, "Post deleted and detached from topics");
        Ok(())
    }
}
