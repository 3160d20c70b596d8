//! In-memory implementation of every outgoing port, so lifecycle tests can
//! drive the real services and handlers without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::{
    ports::outgoing::{PostRepository, PostRepositoryError},
    post_use_cases::PostUseCases,
    services::SoftDeletePostService,
};
use crate::modules::topic::application::{
    domain::entities::SyncPlan,
    ports::outgoing::{
        CreateTopicData, Page, PageRequest, SyncOutcome, TopicListItem, TopicPostItem,
        TopicPostRepository, TopicPostRepositoryError, TopicQuery, TopicQueryError,
        TopicQueryResult, TopicRepository, TopicRepositoryError, TopicResult, TrashedTopicItem,
        UpdateTopicData,
    },
    services::{
        GetTopicPostsService, GetTopicService, GetTopicsService, GetTrashedTopicsService,
        NewTopicService, RestoreTopicService, SoftDeleteTopicService, SyncTopicPostsService,
        UpsertTopicService,
    },
    topic_use_cases::TopicUseCases,
};

#[derive(Debug, Clone)]
struct TopicRow {
    id: Uuid,
    owner: UserId,
    name: String,
    slug: String,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TopicRow {
    fn to_query_result(&self) -> TopicQueryResult {
        TopicQueryResult {
            id: self.id,
            owner: self.owner,
            name: self.name.clone(),
            slug: self.slug.clone(),
            deleted_at: self.deleted_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn to_result(&self) -> TopicResult {
        TopicResult {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            user_id: self.owner,
        }
    }
}

#[derive(Debug, Clone)]
struct PostRow {
    id: Uuid,
    owner: UserId,
    title: String,
    slug: String,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct State {
    topics: Vec<TopicRow>,
    posts: Vec<PostRow>,
    /// `(post_id, topic_id)` in insertion order.
    links: Vec<(Uuid, Uuid)>,
    ticks: i64,
}

impl State {
    /// Strictly increasing timestamps keep "newest first" deterministic.
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        DateTime::<Utc>::from_timestamp(1_700_000_000 + self.ticks, 0).unwrap_or_default()
    }

    fn live_post(&self, id: Uuid) -> bool {
        self.posts
            .iter()
            .any(|p| p.id == id && p.deleted_at.is_none())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_post(&self, owner: UserId, title: &str) -> Uuid {
        let mut state = self.state.lock().unwrap();
        let id = Uuid::new_v4();
        state.posts.push(PostRow {
            id,
            owner,
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            deleted_at: None,
        });
        id
    }

    /// Raw row, trashed or not.
    pub fn topic(&self, id: Uuid) -> Option<TopicQueryResult> {
        let state = self.state.lock().unwrap();
        state
            .topics
            .iter()
            .find(|t| t.id == id)
            .map(TopicRow::to_query_result)
    }

    pub fn link_count(&self) -> usize {
        self.state.lock().unwrap().links.len()
    }

    /// Services wired over this store, as `main` wires them over Postgres.
    pub fn topic_use_cases(&self) -> TopicUseCases {
        TopicUseCases {
            get_list: Arc::new(GetTopicsService::new(self.clone())),
            new_template: Arc::new(NewTopicService::new()),
            get_single: Arc::new(GetTopicService::new(self.clone())),
            upsert: Arc::new(UpsertTopicService::new(self.clone(), self.clone())),
            soft_delete: Arc::new(SoftDeleteTopicService::new(self.clone())),
            get_trashed: Arc::new(GetTrashedTopicsService::new(self.clone())),
            restore: Arc::new(RestoreTopicService::new(self.clone())),
            get_posts: Arc::new(GetTopicPostsService::new(self.clone())),
            sync_posts: Arc::new(SyncTopicPostsService::new(self.clone())),
        }
    }

    pub fn post_use_cases(&self) -> PostUseCases {
        PostUseCases {
            soft_delete: Arc::new(SoftDeletePostService::new(self.clone())),
        }
    }
}

#[async_trait]
impl TopicQuery for InMemoryStore {
    async fn list_topics(&self, page: PageRequest) -> Result<Page<TopicListItem>, TopicQueryError> {
        let state = self.state.lock().unwrap();

        let mut live: Vec<&TopicRow> = state
            .topics
            .iter()
            .filter(|t| t.deleted_at.is_none())
            .collect();
        live.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        let data = live
            .iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.per_page as usize)
            .map(|t| TopicListItem {
                id: t.id,
                name: t.name.clone(),
                slug: t.slug.clone(),
                user_id: t.owner,
                posts_count: state
                    .links
                    .iter()
                    .filter(|(post_id, topic_id)| *topic_id == t.id && state.live_post(*post_id))
                    .count() as u64,
            })
            .collect();

        Ok(Page {
            data,
            total: live.len() as u64,
            page: page.page,
            per_page: page.per_page,
        })
    }

    async fn find_owned_topic(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .topics
            .iter()
            .find(|t| t.id == topic_id && t.owner == owner && t.deleted_at.is_none())
            .map(TopicRow::to_query_result))
    }

    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        Ok(self.topic(topic_id))
    }

    async fn slug_taken(&self, slug: &str, except: Uuid) -> Result<bool, TopicQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .topics
            .iter()
            .any(|t| t.slug == slug && t.id != except))
    }

    async fn list_trashed_topics(
        &self,
        owner: UserId,
    ) -> Result<Vec<TrashedTopicItem>, TopicQueryError> {
        let state = self.state.lock().unwrap();

        let mut items: Vec<TrashedTopicItem> = state
            .topics
            .iter()
            .filter(|t| t.owner == owner)
            .filter_map(|t| {
                t.deleted_at.map(|deleted_at| TrashedTopicItem {
                    id: t.id,
                    name: t.name.clone(),
                    slug: t.slug.clone(),
                    user_id: t.owner,
                    deleted_at,
                })
            })
            .collect();
        items.sort_by(|a, b| b.deleted_at.cmp(&a.deleted_at));

        Ok(items)
    }

    async fn list_topic_posts(&self, topic_id: Uuid) -> Result<Vec<TopicPostItem>, TopicQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .links
            .iter()
            .filter(|(_, t)| *t == topic_id)
            .filter_map(|(post_id, _)| {
                state
                    .posts
                    .iter()
                    .find(|p| p.id == *post_id && p.deleted_at.is_none())
            })
            .map(|p| TopicPostItem {
                id: p.id,
                title: p.title.clone(),
                slug: p.slug.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn create_topic(&self, data: CreateTopicData) -> Result<TopicResult, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();

        if state.topics.iter().any(|t| t.id == data.id) {
            return Err(TopicRepositoryError::TopicAlreadyExists);
        }
        if state.topics.iter().any(|t| t.slug == data.slug) {
            return Err(TopicRepositoryError::SlugTaken);
        }

        let now = state.now();
        let row = TopicRow {
            id: data.id,
            owner: data.owner,
            name: data.name,
            slug: data.slug,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        let result = row.to_result();
        state.topics.push(row);

        Ok(result)
    }

    async fn update_topic(&self, data: UpdateTopicData) -> Result<TopicResult, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();

        if state
            .topics
            .iter()
            .any(|t| t.slug == data.slug && t.id != data.id)
        {
            return Err(TopicRepositoryError::SlugTaken);
        }

        let now = state.now();
        let row = state
            .topics
            .iter_mut()
            .find(|t| t.id == data.id && t.owner == data.owner && t.deleted_at.is_none())
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        row.name = data.name;
        row.slug = data.slug;
        row.updated_at = now;

        Ok(row.to_result())
    }

    async fn soft_delete_topic(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<(), TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let now = state.now();

        let row = state
            .topics
            .iter_mut()
            .find(|t| t.id == topic_id && t.owner == owner && t.deleted_at.is_none())
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        row.deleted_at = Some(now);
        row.updated_at = now;
        Ok(())
    }

    async fn restore_topic(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let now = state.now();

        let row = state
            .topics
            .iter_mut()
            .find(|t| t.id == topic_id && t.owner == owner && t.deleted_at.is_some())
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        row.deleted_at = None;
        row.updated_at = now;
        Ok(row.to_result())
    }
}

#[async_trait]
impl TopicPostRepository for InMemoryStore {
    async fn sync_topic_posts(
        &self,
        owner: UserId,
        topic_id: Uuid,
        post_ids: Vec<Uuid>,
    ) -> Result<SyncOutcome, TopicPostRepositoryError> {
        let mut state = self.state.lock().unwrap();

        if !state
            .topics
            .iter()
            .any(|t| t.id == topic_id && t.owner == owner && t.deleted_at.is_none())
        {
            return Err(TopicPostRepositoryError::TopicNotFound);
        }

        let current: Vec<Uuid> = state
            .links
            .iter()
            .filter(|(_, t)| *t == topic_id)
            .map(|(p, _)| *p)
            .collect();

        let plan = SyncPlan::compute(&current, &post_ids);

        let missing: Vec<Uuid> = plan
            .attach
            .iter()
            .copied()
            .filter(|id| !state.live_post(*id))
            .collect();
        if !missing.is_empty() {
            return Err(TopicPostRepositoryError::PostsNotFound(missing));
        }

        state
            .links
            .retain(|(p, t)| !(*t == topic_id && plan.detach.contains(p)));
        state
            .links
            .extend(plan.attach.iter().map(|p| (*p, topic_id)));

        Ok(SyncOutcome {
            attached: plan.attach,
            detached: plan.detach,
        })
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn soft_delete_post(&self, owner: UserId, post_id: Uuid) -> Result<u64, PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let now = state.now();

        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id && p.owner == owner && p.deleted_at.is_none())
            .ok_or(PostRepositoryError::PostNotFound)?;
        post.deleted_at = Some(now);

        let before = state.links.len();
        state.links.retain(|(p, _)| *p != post_id);

        Ok((before - state.links.len()) as u64)
    }
}
