use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{SyncTopicPostsCommand, SyncTopicPostsError, SyncTopicPostsUseCase},
    outgoing::{SyncOutcome, TopicPostRepository, TopicPostRepositoryError},
};

#[derive(Debug, Clone)]
pub struct SyncTopicPostsService<A>
where
    A: TopicPostRepository + Send + Sync,
{
    associations: A,
}

impl<A> SyncTopicPostsService<A>
where
    A: TopicPostRepository + Send + Sync,
{
    pub fn new(associations: A) -> Self {
        Self { associations }
    }
}

#[async_trait]
impl<A> SyncTopicPostsUseCase for SyncTopicPostsService<A>
where
    A: TopicPostRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SyncTopicPostsCommand,
    ) -> Result<SyncOutcome, SyncTopicPostsError> {
        let outcome = self
            .associations
            .sync_topic_posts(
                command.owner(),
                command.topic_id(),
                command.post_ids().to_vec(),
            )
            .await
            .map_err(|e| match e {
                TopicPostRepositoryError::TopicNotFound => SyncTopicPostsError::TopicNotFound,
                TopicPostRepositoryError::PostsNotFound(ids) => {
                    SyncTopicPostsError::UnknownPosts(ids)
                }
                other => SyncTopicPostsError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            topic_id = %command.topic_id(),
            attached = outcome.attached.len(),
            detached = outcome.detached.len(),
            "Topic posts synced"
        );

        Ok(outcome)
    }
}
