use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::{PostRepository, PostRepositoryError};

#[derive(Debug, Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn soft_delete_stmt(owner: Uuid, post_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE posts
               SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1
               AND user_id = $2
               AND deleted_at IS NULL
            RETURNING id
            "#,
            vec![post_id.into(), owner.into()],
        )
    }

    fn detach_all_stmt(post_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"DELETE FROM posts_topics WHERE post_id = $1"#,
            vec![post_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> PostRepositoryError {
        PostRepositoryError::DatabaseError(e.to_string())
    }

    async fn soft_delete_within<C>(
        conn: &C,
        owner: Uuid,
        post_id: Uuid,
    ) -> Result<u64, PostRepositoryError>
    where
        C: ConnectionTrait,
    {
        conn.query_one(Self::soft_delete_stmt(owner, post_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or(PostRepositoryError::PostNotFound)?;

        let detached = conn
            .execute(Self::detach_all_stmt(post_id))
            .await
            .map_err(Self::map_db_err)?;

        Ok(detached.rows_affected())
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn soft_delete_post(
        &self,
        owner: UserId,
        post_id: Uuid,
    ) -> Result<u64, PostRepositoryError> {
        let owner_uuid: Uuid = owner.into();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::soft_delete_within(&txn, owner_uuid, post_id).await {
            Ok(detached) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(detached)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}
