use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::incoming::use_cases::{
        SoftDeleteTopicError, SoftDeleteTopicUseCase,
    },
    topic::application::ports::outgoing::{TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct SoftDeleteTopicService<R>
where
    R: TopicRepository,
{
    repository: R,
}

impl<R> SoftDeleteTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SoftDeleteTopicUseCase for SoftDeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, topic_id: Uuid) -> Result<(), SoftDeleteTopicError> {
        // Ownership and liveness are part of the repository's row filter
        self.repository
            .soft_delete_topic(owner, topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => SoftDeleteTopicError::TopicNotFound,
                TopicRepositoryError::DatabaseError(msg) => {
                    SoftDeleteTopicError::DatabaseError(msg)
                }
                other => SoftDeleteTopicError::DatabaseError(other.to_string()),
            })?;

        tracing::info!(%topic_id, %owner, "Topic moved to trash");
        Ok(())
    }
}
