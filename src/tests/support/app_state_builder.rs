use actix_web::web;
use std::sync::Arc;

use crate::modules::post::application::{
    ports::incoming::use_cases::SoftDeletePostUseCase, post_use_cases::PostUseCases,
};
use crate::modules::topic::application::{
    ports::incoming::use_cases::{
        GetTopicPostsUseCase, GetTopicUseCase, GetTopicsUseCase, GetTrashedTopicsUseCase,
        NewTopicUseCase, RestoreTopicUseCase, SoftDeleteTopicUseCase, SyncTopicPostsUseCase,
        UpsertTopicUseCase,
    },
    topic_use_cases::TopicUseCases,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` of stubs; override the use case under test.
pub struct TestAppStateBuilder {
    topic: TopicUseCases,
    post: PostUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: TopicUseCases {
                get_list: Arc::new(StubGetTopicsUseCase::success(vec![])),
                new_template: Arc::new(StubNewTopicUseCase::default()),
                get_single: Arc::new(StubGetTopicUseCase::not_found()),
                upsert: Arc::new(StubUpsertTopicUseCase::default()),
                soft_delete: Arc::new(StubSoftDeleteTopicUseCase::success()),
                get_trashed: Arc::new(StubGetTrashedTopicsUseCase::success(vec![])),
                restore: Arc::new(StubRestoreTopicUseCase::not_found()),
                get_posts: Arc::new(StubGetTopicPostsUseCase::not_found()),
                sync_posts: Arc::new(StubSyncTopicPostsUseCase::default()),
            },
            post: PostUseCases {
                soft_delete: Arc::new(StubSoftDeletePostUseCase::success()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + 'static) -> Self {
        self.topic.get_list = Arc::new(uc);
        self
    }

    pub fn with_new_topic(mut self, uc: impl NewTopicUseCase + 'static) -> Self {
        self.topic.new_template = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + 'static) -> Self {
        self.topic.get_single = Arc::new(uc);
        self
    }

    pub fn with_upsert_topic(mut self, uc: impl UpsertTopicUseCase + 'static) -> Self {
        self.topic.upsert = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_topic(mut self, uc: impl SoftDeleteTopicUseCase + 'static) -> Self {
        self.topic.soft_delete = Arc::new(uc);
        self
    }

    pub fn with_get_trashed_topics(
        mut self,
        uc: impl GetTrashedTopicsUseCase + 'static,
    ) -> Self {
        self.topic.get_trashed = Arc::new(uc);
        self
    }

    pub fn with_restore_topic(mut self, uc: impl RestoreTopicUseCase + 'static) -> Self {
        self.topic.restore = Arc::new(uc);
        self
    }

    pub fn with_get_topic_posts(mut self, uc: impl GetTopicPostsUseCase + 'static) -> Self {
        self.topic.get_posts = Arc::new(uc);
        self
    }

    pub fn with_sync_topic_posts(mut self, uc: impl SyncTopicPostsUseCase + 'static) -> Self {
        self.topic.sync_posts = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_post(mut self, uc: impl SoftDeletePostUseCase + 'static) -> Self {
        self.post.soft_delete = Arc::new(uc);
        self
    }

    /// Swap in a fully wired set, e.g. services over the in-memory store.
    pub fn with_topic_use_cases(mut self, topic: TopicUseCases) -> Self {
        self.topic = topic;
        self
    }

    pub fn with_post_use_cases(mut self, post: PostUseCases) -> Self {
        self.post = post;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic: self.topic,
            post: self.post,
        })
    }
}
