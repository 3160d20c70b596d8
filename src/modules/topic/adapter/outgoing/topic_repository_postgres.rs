use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Set, SqlErr,
    Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult, UpdateTopicData,
};

// SeaORM entity imports
use super::sea_orm_entity::topics::{ActiveModel as TopicActiveModel, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> TopicRepositoryError {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => unique_violation(&detail),
            _ => TopicRepositoryError::DatabaseError(e.to_string()),
        }
    }
}

/// Both `topics_pkey` and the slug index are unique; the constraint name tells them apart.
fn unique_violation(detail: &str) -> TopicRepositoryError {
    if detail.contains("slug") {
        TopicRepositoryError::SlugTaken
    } else {
        TopicRepositoryError::TopicAlreadyExists
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(data.id),
            user_id: Set(data.owner.into()),
            name: Set(data.name),
            slug: Set(data.slug),
            ..Default::default()
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_repository_result())
    }

    async fn update_topic(
        &self,
        data: UpdateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let owner: Uuid = data.owner.into();

        let updated = TopicModel::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE topics
               SET name = $3, slug = $4, updated_at = NOW()
             WHERE id = $1
               AND user_id = $2
               AND deleted_at IS NULL
            RETURNING *
            "#,
            [data.id.into(), owner.into(), data.name.into(), data.slug.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        updated
            .map(|model| model.to_repository_result())
            .ok_or(TopicRepositoryError::TopicNotFound)
    }

    async fn soft_delete_topic(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<(), TopicRepositoryError> {
        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: Uuid,
        }

        let owner: Uuid = owner.into();

        let result = IdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE topics
               SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1
               AND user_id = $2
               AND deleted_at IS NULL
            RETURNING id
            "#,
            [topic_id.into(), owner.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        match result {
            Some(_) => Ok(()),
            None => Err(TopicRepositoryError::TopicNotFound),
        }
    }

    async fn restore_topic(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let owner: Uuid = owner.into();

        let restored = TopicModel::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE topics
               SET deleted_at = NULL, updated_at = NOW()
             WHERE id = $1
               AND user_id = $2
               AND deleted_at IS NOT NULL
            RETURNING *
            "#,
            [topic_id.into(), owner.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        restored
            .map(|model| model.to_repository_result())
            .ok_or(TopicRepositoryError::TopicNotFound)
    }
}
