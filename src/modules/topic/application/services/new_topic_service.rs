use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::ports::incoming::use_cases::{NewTopicUseCase, TopicTemplate};

#[derive(Debug, Clone, Default)]
pub struct NewTopicService;

impl NewTopicService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NewTopicUseCase for NewTopicService {
    async fn execute(&self) -> TopicTemplate {
        TopicTemplate {
            id: Uuid::new_v4(),
            name: String::new(),
            slug: String::new(),
        }
    }
}
