mod get_topic_posts_use_case;
mod get_topic_use_case;
mod get_topics_use_case;
mod get_trashed_topics_use_case;
mod new_topic_use_case;
mod restore_topic_use_case;
mod soft_delete_topic_use_case;
mod sync_topic_posts_use_case;
mod upsert_topic_use_case;

pub use get_topic_posts_use_case::{GetTopicPostsError, GetTopicPostsUseCase, TopicPosts};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use get_trashed_topics_use_case::{GetTrashedTopicsError, GetTrashedTopicsUseCase};
pub use new_topic_use_case::{NewTopicUseCase, TopicTemplate};
pub use restore_topic_use_case::{RestoreTopicError, RestoreTopicUseCase};
pub use soft_delete_topic_use_case::{SoftDeleteTopicError, SoftDeleteTopicUseCase};
pub use sync_topic_posts_use_case::{
    SyncTopicPostsCommand, SyncTopicPostsError, SyncTopicPostsUseCase,
};
pub use upsert_topic_use_case::{UpsertTopicCommand, UpsertTopicError, UpsertTopicUseCase};
