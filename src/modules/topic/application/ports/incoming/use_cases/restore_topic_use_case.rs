use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::outgoing::TopicResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RestoreTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RestoreTopicUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, topic_id: Uuid)
        -> Result<TopicResult, RestoreTopicError>;
}
