use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::outgoing::TrashedTopicItem,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTrashedTopicsError {
    #[error("Failed to fetch trashed topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTrashedTopicsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<TrashedTopicItem>, GetTrashedTopicsError>;
}
