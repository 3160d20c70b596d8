use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    GetTopicPostsUseCase, GetTopicUseCase, GetTopicsUseCase, GetTrashedTopicsUseCase,
    NewTopicUseCase, RestoreTopicUseCase, SoftDeleteTopicUseCase, SyncTopicPostsUseCase,
    UpsertTopicUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub new_template: Arc<dyn NewTopicUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertTopicUseCase + Send + Sync>,
    pub soft_delete: Arc<dyn SoftDeleteTopicUseCase + Send + Sync>,
    pub get_trashed: Arc<dyn GetTrashedTopicsUseCase + Send + Sync>,
    pub restore: Arc<dyn RestoreTopicUseCase + Send + Sync>,
    pub get_posts: Arc<dyn GetTopicPostsUseCase + Send + Sync>,
    pub sync_posts: Arc<dyn SyncTopicPostsUseCase + Send + Sync>,
}
