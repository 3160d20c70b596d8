use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::outgoing::TopicResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, topic_id: Uuid) -> Result<TopicResult, GetTopicError>;
}
