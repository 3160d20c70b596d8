use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::{
        incoming::use_cases::{GetTopicError, GetTopicUseCase},
        outgoing::{TopicQuery, TopicResult},
    },
};

#[derive(Debug, Clone)]
pub struct GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicUseCase for GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId, topic_id: Uuid) -> Result<TopicResult, GetTopicError> {
        let topic = self
            .query
            .find_owned_topic(owner, topic_id)
            .await
            .map_err(|e| GetTopicError::QueryFailed(e.to_string()))?
            .ok_or(GetTopicError::TopicNotFound)?;

        Ok(TopicResult {
            id: topic.id,
            name: topic.name,
            slug: topic.slug,
            user_id: topic.owner,
        })
    }
}
