use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

/// Blank form for a topic that does not exist yet. Saving it creates the
/// topic under `id`.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TopicTemplate {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

#[async_trait]
pub trait NewTopicUseCase: Send + Sync {
    async fn execute(&self) -> TopicTemplate;
}
