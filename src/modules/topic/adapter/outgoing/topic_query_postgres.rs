use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::adapter::outgoing::sea_orm_entity::posts::{
    Column as PostColumn, Entity as PostEntity,
};
use crate::modules::topic::application::ports::outgoing::{
    Page, PageRequest, TopicListItem, TopicPostItem, TopicQuery, TopicQueryError,
    TopicQueryResult, TrashedTopicItem,
};

// SeaORM entities
use super::sea_orm_entity::posts_topics::{
    Column as PostsTopicsColumn, Entity as PostsTopicsEntity,
};
use super::sea_orm_entity::topics::{
    Column as TopicColumn, Entity as TopicEntity, Model as TopicModel,
};

#[derive(FromQueryResult)]
struct TopicListRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    slug: String,
    posts_count: i64,
}

impl From<TopicListRow> for TopicListItem {
    fn from(row: TopicListRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            user_id: UserId::from(row.user_id),
            posts_count: u64::try_from(row.posts_count).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn count_live_stmt() -> Statement {
        Statement::from_string(
            DatabaseBackend::Postgres,
            r#"SELECT COUNT(*)::BIGINT AS total FROM topics WHERE deleted_at IS NULL"#,
        )
    }

    /// Live topics with the number of live posts linked to each.
    fn list_page_stmt(page: PageRequest) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              t.id,
              t.user_id,
              t.name,
              t.slug,
              COUNT(p.id)::BIGINT AS posts_count
            FROM topics t
            LEFT JOIN posts_topics pt
              ON pt.topic_id = t.id
            LEFT JOIN posts p
              ON p.id = pt.post_id
             AND p.deleted_at IS NULL
            WHERE t.deleted_at IS NULL
            GROUP BY t.id
            ORDER BY t.created_at DESC, t.id
            LIMIT $1 OFFSET $2
            "#,
            vec![
                i64::try_from(page.per_page).unwrap_or(i64::MAX).into(),
                i64::try_from(page.offset()).unwrap_or(i64::MAX).into(),
            ],
        )
    }

    fn map_db_err(e: sea_orm::DbErr) -> TopicQueryError {
        TopicQueryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_topics(&self, page: PageRequest) -> Result<Page<TopicListItem>, TopicQueryError> {
        let total: i64 = self
            .db
            .query_one(Self::count_live_stmt())
            .await
            .map_err(Self::map_db_err)?
            .map(|row| row.try_get::<i64>("", "total"))
            .transpose()
            .map_err(Self::map_db_err)?
            .unwrap_or_default();

        let rows = TopicListRow::find_by_statement(Self::list_page_stmt(page))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Page {
            data: rows.into_iter().map(TopicListItem::from).collect(),
            total: u64::try_from(total).unwrap_or_default(),
            page: page.page,
            per_page: page.per_page,
        })
    }

    async fn find_owned_topic(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        let model: Option<TopicModel> = TopicEntity::find_by_id(topic_id)
            .filter(TopicColumn::UserId.eq(owner.value()))
            .filter(TopicColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.map(|m| m.to_query_result()))
    }

    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.map(|m| m.to_query_result()))
    }

    async fn slug_taken(&self, slug: &str, except: Uuid) -> Result<bool, TopicQueryError> {
        let clash = TopicEntity::find()
            .filter(TopicColumn::Slug.eq(slug))
            .filter(TopicColumn::Id.ne(except))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(clash.is_some())
    }

    async fn list_trashed_topics(
        &self,
        owner: UserId,
    ) -> Result<Vec<TrashedTopicItem>, TopicQueryError> {
        let models = TopicEntity::find()
            .filter(TopicColumn::UserId.eq(owner.value()))
            .filter(TopicColumn::DeletedAt.is_not_null())
            .order_by_desc(TopicColumn::DeletedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models
            .into_iter()
            .filter_map(|m| {
                let deleted_at = m.deleted_at?;
                Some(TrashedTopicItem {
                    id: m.id,
                    name: m.name,
                    slug: m.slug,
                    user_id: UserId::from(m.user_id),
                    deleted_at: deleted_at.into(),
                })
            })
            .collect())
    }

    async fn list_topic_posts(
        &self,
        topic_id: Uuid,
    ) -> Result<Vec<TopicPostItem>, TopicQueryError> {
        let posts = PostEntity::find()
            .inner_join(PostsTopicsEntity)
            .filter(PostsTopicsColumn::TopicId.eq(topic_id))
            .filter(PostColumn::DeletedAt.is_null())
            .order_by_asc(PostsTopicsColumn::CreatedAt)
            .order_by_asc(PostColumn::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(posts.iter().map(|p| p.to_topic_post_item()).collect())
    }
}
