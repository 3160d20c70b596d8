use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::{PostRepository, PostRepositoryError};
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, Page, PageRequest, SyncOutcome, TopicListItem, TopicPostItem,
    TopicPostRepository, TopicPostRepositoryError, TopicQuery, TopicQueryError, TopicQueryResult,
    TopicRepository, TopicRepositoryError, TopicResult, TrashedTopicItem, UpdateTopicData,
};

mock! {
    pub TopicQuery {}

    #[async_trait]
    impl TopicQuery for TopicQuery {
        async fn list_topics(&self, page: PageRequest) -> Result<Page<TopicListItem>, TopicQueryError>;
        async fn find_owned_topic(
            &self,
            owner: UserId,
            topic_id: Uuid,
        ) -> Result<Option<TopicQueryResult>, TopicQueryError>;
        async fn find_topic(&self, topic_id: Uuid) -> Result<Option<TopicQueryResult>, TopicQueryError>;
        async fn slug_taken(&self, slug: &str, except: Uuid) -> Result<bool, TopicQueryError>;
        async fn list_trashed_topics(
            &self,
            owner: UserId,
        ) -> Result<Vec<TrashedTopicItem>, TopicQueryError>;
        async fn list_topic_posts(&self, topic_id: Uuid) -> Result<Vec<TopicPostItem>, TopicQueryError>;
    }
}

mock! {
    pub TopicRepository {}

    #[async_trait]
    impl TopicRepository for TopicRepository {
        async fn create_topic(&self, data: CreateTopicData) -> Result<TopicResult, TopicRepositoryError>;
        async fn update_topic(&self, data: UpdateTopicData) -> Result<TopicResult, TopicRepositoryError>;
        async fn soft_delete_topic(&self, owner: UserId, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
        async fn restore_topic(&self, owner: UserId, topic_id: Uuid) -> Result<TopicResult, TopicRepositoryError>;
    }
}

mock! {
    pub TopicPostRepository {}

    #[async_trait]
    impl TopicPostRepository for TopicPostRepository {
        async fn sync_topic_posts(
            &self,
            owner: UserId,
            topic_id: Uuid,
            post_ids: Vec<Uuid>,
        ) -> Result<SyncOutcome, TopicPostRepositoryError>;
    }
}

mock! {
    pub PostRepository {}

    #[async_trait]
    impl PostRepository for PostRepository {
        async fn soft_delete_post(&self, owner: UserId, post_id: Uuid) -> Result<u64, PostRepositoryError>;
    }
}
