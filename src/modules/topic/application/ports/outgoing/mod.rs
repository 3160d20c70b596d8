mod topic_post_repository;
mod topic_query;
mod topic_repository;

pub use topic_post_repository::{SyncOutcome, TopicPostRepository, TopicPostRepositoryError};
pub use topic_query::{
    Page, PageRequest, TopicListItem, TopicPostItem, TopicQuery, TopicQueryError,
    TopicQueryResult, TrashedTopicItem,
};
pub use topic_repository::{
    CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult, UpdateTopicData,
};
