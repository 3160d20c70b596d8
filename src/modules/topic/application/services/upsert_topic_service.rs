use async_trait::async_trait;

use crate::{
    shared::validation::FieldErrors,
    topic::application::ports::{
        incoming::use_cases::{UpsertTopicCommand, UpsertTopicError, UpsertTopicUseCase},
        outgoing::{
            CreateTopicData, TopicQuery, TopicRepository, TopicRepositoryError, TopicResult,
            UpdateTopicData,
        },
    },
};

const SLUG_TAKEN: &str = "The slug has already been taken.";
const ID_TAKEN: &str = "The id has already been taken.";

/// Creates the topic when the id is unknown, otherwise updates it in place.
/// Topics owned by someone else or sitting in the trash are reported as missing.
#[derive(Debug, Clone)]
pub struct UpsertTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpsertTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpsertTopicUseCase for UpsertTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: UpsertTopicCommand) -> Result<TopicResult, UpsertTopicError> {
        let existing = self
            .query
            .find_topic(command.id())
            .await
            .map_err(|e| UpsertTopicError::RepositoryError(e.to_string()))?;

        if let Some(topic) = &existing {
            if topic.owner != command.owner() || topic.is_trashed() {
                tracing::debug!(
                    topic_id = %command.id(),
                    caller = %command.owner(),
                    trashed = topic.is_trashed(),
                    "Upsert refused for topic not visible to caller"
                );
                return Err(UpsertTopicError::TopicNotFound);
            }
        }

        let slug_taken = self
            .query
            .slug_taken(command.slug(), command.id())
            .await
            .map_err(|e| UpsertTopicError::RepositoryError(e.to_string()))?;

        if slug_taken {
            return Err(UpsertTopicError::ValidationFailed(FieldErrors::single(
                "slug", SLUG_TAKEN,
            )));
        }

        let result = match existing {
            None => {
                self.repository
                    .create_topic(CreateTopicData {
                        id: command.id(),
                        owner: command.owner(),
                        name: command.name().to_string(),
                        slug: command.slug().to_string(),
                    })
                    .await
            }
            Some(_) => {
                self.repository
                    .update_topic(UpdateTopicData {
                        id: command.id(),
                        owner: command.owner(),
                        name: command.name().to_string(),
                        slug: command.slug().to_string(),
                    })
                    .await
            }
        };

        result.map_err(|e| match e {
            TopicRepositoryError::TopicNotFound => UpsertTopicError::TopicNotFound,
            // Lost a race against a concurrent writer between the checks and the write.
            TopicRepositoryError::SlugTaken => {
                UpsertTopicError::ValidationFailed(FieldErrors::single("slug", SLUG_TAKEN))
            }
            TopicRepositoryError::TopicAlreadyExists => {
                UpsertTopicError::ValidationFailed(FieldErrors::single("id", ID_TAKEN))
            }
            other => UpsertTopicError::RepositoryError(other.to_string()),
        })
    }
}
