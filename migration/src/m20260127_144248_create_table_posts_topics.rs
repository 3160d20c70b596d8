use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create posts_topics join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PostsTopics::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PostsTopics::PostId).uuid().not_null())
                    .col(ColumnDef::new(PostsTopics::TopicId).uuid().not_null())
                    .col(
                        ColumnDef::new(PostsTopics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite primary key: one link per pair
                    .primary_key(
                        Index::create()
                            .col(PostsTopics::PostId)
                            .col(PostsTopics::TopicId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_topics_post_id")
                            .from(PostsTopics::Table, PostsTopics::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_topics_topic_id")
                            .from(PostsTopics::Table, PostsTopics::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all posts for a topic (the PK already covers post_id first)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_posts_topics_topic_id
                ON posts_topics (topic_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_posts_topics_topic_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PostsTopics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PostsTopics {
    Table,
    PostId,
    TopicId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
}
