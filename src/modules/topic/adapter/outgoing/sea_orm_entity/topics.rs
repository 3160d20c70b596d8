use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::ports::outgoing::{TopicQueryResult, TopicResult};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub slug: String,

    pub deleted_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> TopicResult {
        TopicResult {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            user_id: UserId::from(self.user_id),
        }
    }

    pub fn to_query_result(&self) -> TopicQueryResult {
        TopicQueryResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            name: self.name.clone(),
            slug: self.slug.clone(),
            deleted_at: self.deleted_at.map(Into::into),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::posts_topics::Entity")]
    PostsTopics,
}

impl Related<super::posts_topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostsTopics.def()
    }
}

impl Related<crate::modules::post::adapter::outgoing::sea_orm_entity::posts::Entity> for Entity {
    fn to() -> RelationDef {
        super::posts_topics::Relation::Post.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::posts_topics::Relation::Topic.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
