use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::outgoing::TopicPostItem,
};

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TopicPosts {
    pub data: Vec<TopicPostItem>,
    pub total: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicPostsError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic posts: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicPostsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, topic_id: Uuid)
        -> Result<TopicPosts, GetTopicPostsError>;
}
