use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    shared::validation::FieldErrors,
    topic::application::{
        domain::entities::{TopicName, TopicSlug},
        ports::outgoing::TopicResult,
    },
};

//
// ──────────────────────────────────────────────────────────
// Upsert Topic Command
// ──────────────────────────────────────────────────────────
//

/// Validated input for saving a topic under the id taken from the path.
#[derive(Debug, Clone)]
pub struct UpsertTopicCommand {
    owner: UserId,
    id: Uuid,
    name: TopicName,
    slug: TopicSlug,
}

impl UpsertTopicCommand {
    /// Collects every field problem at once instead of stopping at the first.
    pub fn new(
        owner: UserId,
        path_id: &str,
        body_id: Option<&str>,
        name: Option<&str>,
        slug: Option<&str>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let id = match Uuid::parse_str(path_id) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.add("id", "The id must be a valid UUID.");
                None
            }
        };

        if let (Some(id), Some(body_id)) = (id, body_id) {
            if Uuid::parse_str(body_id).ok() != Some(id) {
                errors.add("id", "The id does not match the topic being saved.");
            }
        }

        let name = match TopicName::parse(name.unwrap_or_default()) {
            Ok(name) => Some(name),
            Err(e) => {
                errors.add("name", e.to_string());
                None
            }
        };

        let slug = match TopicSlug::parse(slug.unwrap_or_default()) {
            Ok(slug) => Some(slug),
            Err(e) => {
                errors.add("slug", e.to_string());
                None
            }
        };

        match (id, name, slug) {
            (Some(id), Some(name), Some(slug)) if errors.is_empty() => Ok(Self {
                owner,
                id,
                name,
                slug,
            }),
            _ => Err(errors),
        }
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Validation failed: {0}")]
    ValidationFailed(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpsertTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpsertTopicCommand) -> Result<TopicResult, UpsertTopicError>;
}
