mod get_topic_posts_service;
mod get_topic_service;
mod get_topics_service;
mod get_trashed_topics_service;
mod new_topic_service;
mod restore_topic_service;
mod soft_delete_topic_service;
mod sync_topic_posts_service;
mod upsert_topic_service;

pub use get_topic_posts_service::GetTopicPostsService;
pub use get_topic_service::GetTopicService;
pub use get_topics_service::GetTopicsService;
pub use get_trashed_topics_service::GetTrashedTopicsService;
pub use new_topic_service::NewTopicService;
pub use restore_topic_service::RestoreTopicService;
pub use soft_delete_topic_service::SoftDeleteTopicService;
pub use sync_topic_posts_service::SyncTopicPostsService;
pub use upsert_topic_service::UpsertTopicService;
