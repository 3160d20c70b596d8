use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::{
        incoming::use_cases::{GetTrashedTopicsError, GetTrashedTopicsUseCase},
        outgoing::{TopicQuery, TrashedTopicItem},
    },
};

#[derive(Debug, Clone)]
pub struct GetTrashedTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTrashedTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTrashedTopicsUseCase for GetTrashedTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
    ) -> Result<Vec<TrashedTopicItem>, GetTrashedTopicsError> {
        self.query
            .list_trashed_topics(owner)
            .await
            .map_err(|e| GetTrashedTopicsError::QueryFailed(e.to_string()))
    }
}
