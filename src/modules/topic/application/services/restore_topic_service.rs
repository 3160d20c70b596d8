use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::{
        incoming::use_cases::{RestoreTopicError, RestoreTopicUseCase},
        outgoing::{TopicRepository, TopicRepositoryError, TopicResult},
    },
};

#[derive(Debug, Clone)]
pub struct RestoreTopicService<R>
where
    R: TopicRepository,
{
    repository: R,
}

impl<R> RestoreTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RestoreTopicUseCase for RestoreTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<TopicResult, RestoreTopicError> {
        let restored = self
            .repository
            .restore_topic(owner, topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => RestoreTopicError::TopicNotFound,
                other => RestoreTopicError::DatabaseError(other.to_string()),
            })?;

        tracing::info!(%topic_id, %owner, "Topic restored from trash");
        Ok(restored)
    }
}
