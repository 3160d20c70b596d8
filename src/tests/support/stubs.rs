use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::incoming::use_cases::{
    SoftDeletePostError, SoftDeletePostUseCase,
};
use crate::modules::topic::application::ports::incoming::use_cases::{
    GetTopicError, GetTopicPostsError, GetTopicPostsUseCase, GetTopicUseCase, GetTopicsError,
    GetTopicsUseCase, GetTrashedTopicsError, GetTrashedTopicsUseCase, NewTopicUseCase,
    RestoreTopicError, RestoreTopicUseCase, SoftDeleteTopicError, SoftDeleteTopicUseCase,
    SyncTopicPostsCommand, SyncTopicPostsError, SyncTopicPostsUseCase, TopicPosts, TopicTemplate,
    UpsertTopicCommand, UpsertTopicError, UpsertTopicUseCase,
};
use crate::modules::topic::application::ports::outgoing::{
    Page, PageRequest, SyncOutcome, TopicListItem, TopicResult, TrashedTopicItem,
};

// ============================================================
// Topic listing
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<TopicListItem>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(data: Vec<TopicListItem>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    /// Echoes the requested page back so handlers can be checked for
    /// query parsing.
    async fn execute(&self, page: PageRequest) -> Result<Page<TopicListItem>, GetTopicsError> {
        let data = self.result.clone()?;
        Ok(Page {
            total: data.len() as u64,
            data,
            page: page.page,
            per_page: page.per_page,
        })
    }
}

// ============================================================
// New topic template
// ============================================================

#[derive(Clone)]
pub struct StubNewTopicUseCase {
    id: Uuid,
}

impl StubNewTopicUseCase {
    pub fn with_id(id: Uuid) -> Self {
        Self { id }
    }
}

impl Default for StubNewTopicUseCase {
    fn default() -> Self {
        Self::with_id(Uuid::new_v4())
    }
}

#[async_trait]
impl NewTopicUseCase for StubNewTopicUseCase {
    async fn execute(&self) -> TopicTemplate {
        TopicTemplate {
            id: self.id,
            name: String::new(),
            slug: String::new(),
        }
    }
}

// ============================================================
// Show topic
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicUseCase {
    result: Result<TopicResult, GetTopicError>,
}

impl StubGetTopicUseCase {
    pub fn success(topic: TopicResult) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetTopicError::TopicNotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, _owner: UserId, _topic_id: Uuid) -> Result<TopicResult, GetTopicError> {
        self.result.clone()
    }
}

// ============================================================
// Upsert topic
// ============================================================

/// Saves whatever the command carries unless configured to fail.
#[derive(Clone, Default)]
pub struct StubUpsertTopicUseCase {
    error: Option<UpsertTopicError>,
}

impl StubUpsertTopicUseCase {
    pub fn failing(error: UpsertTopicError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl UpsertTopicUseCase for StubUpsertTopicUseCase {
    async fn execute(&self, command: UpsertTopicCommand) -> Result<TopicResult, UpsertTopicError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        Ok(TopicResult {
            id: command.id(),
            name: command.name().to_string(),
            slug: command.slug().to_string(),
            user_id: command.owner(),
        })
    }
}

// ============================================================
// Soft delete / restore topic
// ============================================================

#[derive(Clone)]
pub struct StubSoftDeleteTopicUseCase {
    result: Result<(), SoftDeleteTopicError>,
}

impl StubSoftDeleteTopicUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(SoftDeleteTopicError::TopicNotFound),
        }
    }

    pub fn db_error(msg: &str) -> Self {
        Self {
            result: Err(SoftDeleteTopicError::DatabaseError(msg.into())),
        }
    }
}

#[async_trait]
impl SoftDeleteTopicUseCase for StubSoftDeleteTopicUseCase {
    async fn execute(&self, _owner: UserId, _topic_id: Uuid) -> Result<(), SoftDeleteTopicError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubRestoreTopicUseCase {
    result: Result<TopicResult, RestoreTopicError>,
}

impl StubRestoreTopicUseCase {
    pub fn success(topic: TopicResult) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(RestoreTopicError::TopicNotFound),
        }
    }

    pub fn db_error(msg: &str) -> Self {
        Self {
            result: Err(RestoreTopicError::DatabaseError(msg.into())),
        }
    }
}

#[async_trait]
impl RestoreTopicUseCase for StubRestoreTopicUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _topic_id: Uuid,
    ) -> Result<TopicResult, RestoreTopicError> {
        self.result.clone()
    }
}

// ============================================================
// Trashed topics
// ============================================================

#[derive(Clone)]
pub struct StubGetTrashedTopicsUseCase {
    result: Result<Vec<TrashedTopicItem>, GetTrashedTopicsError>,
}

impl StubGetTrashedTopicsUseCase {
    pub fn success(items: Vec<TrashedTopicItem>) -> Self {
        Self { result: Ok(items) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTrashedTopicsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTrashedTopicsUseCase for StubGetTrashedTopicsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<TrashedTopicItem>, GetTrashedTopicsError> {
        self.result.clone()
    }
}

// ============================================================
// Topic posts
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicPostsUseCase {
    result: Result<TopicPosts, GetTopicPostsError>,
}

impl StubGetTopicPostsUseCase {
    pub fn success(posts: TopicPosts) -> Self {
        Self { result: Ok(posts) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetTopicPostsError::TopicNotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicPostsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicPostsUseCase for StubGetTopicPostsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _topic_id: Uuid,
    ) -> Result<TopicPosts, GetTopicPostsError> {
        self.result.clone()
    }
}

/// Reports every requested post as attached unless configured to fail.
#[derive(Clone, Default)]
pub struct StubSyncTopicPostsUseCase {
    error: Option<SyncTopicPostsError>,
}

impl StubSyncTopicPostsUseCase {
    pub fn failing(error: SyncTopicPostsError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl SyncTopicPostsUseCase for StubSyncTopicPostsUseCase {
    async fn execute(
        &self,
        command: SyncTopicPostsCommand,
    ) -> Result<SyncOutcome, SyncTopicPostsError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        Ok(SyncOutcome {
            attached: command.post_ids().to_vec(),
            detached: vec![],
        })
    }
}

// ============================================================
// Post deletion
// ============================================================

#[derive(Clone)]
pub struct StubSoftDeletePostUseCase {
    result: Result<(), SoftDeletePostError>,
}

impl StubSoftDeletePostUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(SoftDeletePostError::PostNotFound),
        }
    }

    pub fn db_error(msg: &str) -> Self {
        Self {
            result: Err(SoftDeletePostError::DatabaseError(msg.into())),
        }
    }
}

#[async_trait]
impl SoftDeletePostUseCase for StubSoftDeletePostUseCase {
    async fn execute(&self, _owner: UserId, _post_id: Uuid) -> Result<(), SoftDeletePostError> {
        self.result.clone()
    }
}
