use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::{
        incoming::use_cases::{GetTopicPostsError, GetTopicPostsUseCase, TopicPosts},
        outgoing::TopicQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetTopicPostsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicPostsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicPostsUseCase for GetTopicPostsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<TopicPosts, GetTopicPostsError> {
        self.query
            .find_owned_topic(owner, topic_id)
            .await
            .map_err(|e| GetTopicPostsError::QueryFailed(e.to_string()))?
            .ok_or(GetTopicPostsError::TopicNotFound)?;

        let posts = self
            .query
            .list_topic_posts(topic_id)
            .await
            .map_err(|e| GetTopicPostsError::QueryFailed(e.to_string()))?;

        Ok(TopicPosts {
            total: posts.len(),
            data: posts,
        })
    }
}
