use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, Set, Statement, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::adapter::outgoing::sea_orm_entity::posts::{
    Column as PostColumn, Entity as PostEntity,
};
use crate::modules::topic::application::domain::entities::SyncPlan;
use crate::modules::topic::application::ports::outgoing::{
    SyncOutcome, TopicPostRepository, TopicPostRepositoryError,
};

use super::sea_orm_entity::posts_topics::{
    ActiveModel as PostsTopicsActiveModel, Column as PostsTopicsColumn,
    Entity as PostsTopicsEntity,
};

#[derive(Debug, Clone)]
pub struct TopicPostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicPostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Locks the topic row so concurrent syncs of one topic run one after another.
    fn lock_topic_stmt(owner: Uuid, topic_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT t.id
            FROM topics t
            WHERE t.id = $1
              AND t.user_id = $2
              AND t.deleted_at IS NULL
            FOR UPDATE
            "#,
            vec![topic_id.into(), owner.into()],
        )
    }

    fn current_links_stmt(topic_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT pt.post_id
            FROM posts_topics pt
            WHERE pt.topic_id = $1
            ORDER BY pt.created_at, pt.post_id
            "#,
            vec![topic_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> TopicPostRepositoryError {
        TopicPostRepositoryError::DatabaseError(e.to_string())
    }

    async fn sync_within<C>(
        conn: &C,
        owner: Uuid,
        topic_id: Uuid,
        desired: &[Uuid],
    ) -> Result<SyncOutcome, TopicPostRepositoryError>
    where
        C: ConnectionTrait,
    {
        conn.query_one(Self::lock_topic_stmt(owner, topic_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or(TopicPostRepositoryError::TopicNotFound)?;

        let current = conn
            .query_all(Self::current_links_stmt(topic_id))
            .await
            .map_err(Self::map_db_err)?
            .iter()
            .map(|row| row.try_get::<Uuid>("", "post_id"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Self::map_db_err)?;

        let plan = SyncPlan::compute(&current, desired);
        if plan.is_noop() {
            return Ok(SyncOutcome::default());
        }

        if !plan.attach.is_empty() {
            Self::ensure_live_posts(conn, &plan.attach).await?;
        }

        if !plan.detach.is_empty() {
            PostsTopicsEntity::delete_many()
                .filter(PostsTopicsColumn::TopicId.eq(topic_id))
                .filter(PostsTopicsColumn::PostId.is_in(plan.detach.clone()))
                .exec(conn)
                .await
                .map_err(Self::map_db_err)?;
        }

        if !plan.attach.is_empty() {
            let links = plan.attach.iter().map(|post_id| PostsTopicsActiveModel {
                post_id: Set(*post_id),
                topic_id: Set(topic_id),
                ..Default::default()
            });

            PostsTopicsEntity::insert_many(links)
                .on_conflict(
                    OnConflict::columns([PostsTopicsColumn::PostId, PostsTopicsColumn::TopicId])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(conn)
                .await
                .map_err(Self::map_db_err)?;
        }

        Ok(SyncOutcome {
            attached: plan.attach,
            detached: plan.detach,
        })
    }

    /// Fails with the ids that do not name a live post.
    async fn ensure_live_posts<C>(conn: &C, ids: &[Uuid]) -> Result<(), TopicPostRepositoryError>
    where
        C: ConnectionTrait,
    {
        let found: HashSet<Uuid> = PostEntity::find()
            .filter(PostColumn::Id.is_in(ids.to_vec()))
            .filter(PostColumn::DeletedAt.is_null())
            .order_by_asc(PostColumn::Id)
            .all(conn)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(|post| post.id)
            .collect();

        let missing: Vec<Uuid> = ids
            .iter()
            .copied()
            .filter(|id| !found.contains(id))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TopicPostRepositoryError::PostsNotFound(missing))
        }
    }
}

#[async_trait]
impl TopicPostRepository for TopicPostRepositoryPostgres {
    async fn sync_topic_posts(
        &self,
        owner: UserId,
        topic_id: Uuid,
        post_ids: Vec<Uuid>,
    ) -> Result<SyncOutcome, TopicPostRepositoryError> {
        let owner_uuid: Uuid = owner.into();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::sync_within(&txn, owner_uuid, topic_id, &post_ids).await {
            Ok(outcome) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(outcome)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}
