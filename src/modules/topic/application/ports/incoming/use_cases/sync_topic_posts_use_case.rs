use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    shared::validation::FieldErrors,
    topic::application::{domain::entities::dedup_ids, ports::outgoing::SyncOutcome},
};

//
// ──────────────────────────────────────────────────────────
// Sync Topic Posts Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SyncTopicPostsCommand {
    owner: UserId,
    topic_id: Uuid,
    post_ids: Vec<Uuid>,
}

impl SyncTopicPostsCommand {
    /// `post_ids` is the complete desired set; repeated ids collapse.
    pub fn new(
        owner: UserId,
        topic_id: Uuid,
        post_ids: Option<Vec<String>>,
    ) -> Result<Self, FieldErrors> {
        let Some(raw_ids) = post_ids else {
            return Err(FieldErrors::single(
                "post_ids",
                "The post_ids field is required.",
            ));
        };

        let mut parsed = Vec::with_capacity(raw_ids.len());
        for raw in &raw_ids {
            match Uuid::parse_str(raw) {
                Ok(id) => parsed.push(id),
                Err(_) => {
                    return Err(FieldErrors::single(
                        "post_ids",
                        format!("The post id {raw} is not a valid UUID."),
                    ))
                }
            }
        }

        Ok(Self {
            owner,
            topic_id,
            post_ids: dedup_ids(&parsed),
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn post_ids(&self) -> &[Uuid] {
        &self.post_ids
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SyncTopicPostsError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Unknown posts: {0:?}")]
    UnknownPosts(Vec<Uuid>),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SyncTopicPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SyncTopicPostsCommand,
    ) -> Result<SyncOutcome, SyncTopicPostsError>;
}
