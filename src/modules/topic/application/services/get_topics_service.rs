use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicsError, GetTopicsUseCase},
    outgoing::{Page, PageRequest, TopicListItem, TopicQuery},
};

#[derive(Debug, Clone)]
pub struct GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicsUseCase for GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<Page<TopicListItem>, GetTopicsError> {
        self.query
            .list_topics(page)
            .await
            .map_err(|e| GetTopicsError::QueryFailed(e.to_string()))
    }
}
