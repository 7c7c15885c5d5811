use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Votes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Votes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Votes::UserId).uuid().not_null())
                    .col(ColumnDef::new(Votes::VoteType).string_len(4).not_null())
                    .col(ColumnDef::new(Votes::PostId).uuid())
                    .col(ColumnDef::new(Votes::CommentId).uuid())
                    .col(
                        ColumnDef::new(Votes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_user_id")
                            .from(Votes::Table, Votes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_post_id")
                            .from(Votes::Table, Votes::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_comment_id")
                            .from(Votes::Table, Votes::CommentId)
                            .to(Comments::Table, Comments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A vote targets exactly one of post/comment, and a user holds at
        // most one vote per target. The partial unique indexes are the
        // backstop for the toggle logic's concurrent-insert race.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE votes
                ADD CONSTRAINT chk_votes_single_target
                CHECK (
                    (post_id IS NOT NULL AND comment_id IS NULL) OR
                    (post_id IS NULL AND comment_id IS NOT NULL)
                );

                ALTER TABLE votes
                ADD CONSTRAINT chk_votes_vote_type
                CHECK (vote_type IN ('UP', 'DOWN'));

                CREATE UNIQUE INDEX idx_votes_user_post_unique
                ON votes (user_id, post_id)
                WHERE post_id IS NOT NULL;

                CREATE UNIQUE INDEX idx_votes_user_comment_unique
                ON votes (user_id, comment_id)
                WHERE comment_id IS NOT NULL;

                CREATE INDEX idx_votes_post_id ON votes (post_id)
                WHERE post_id IS NOT NULL;

                CREATE INDEX idx_votes_comment_id ON votes (comment_id)
                WHERE comment_id IS NOT NULL;
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
                DROP INDEX IF EXISTS idx_votes_user_post_unique;
                DROP INDEX IF EXISTS idx_votes_user_comment_unique;
                DROP INDEX IF EXISTS idx_votes_post_id;
                DROP INDEX IF EXISTS idx_votes_comment_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Votes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Votes {
    Table,
    Id,
    UserId,
    VoteType,
    PostId,
    CommentId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
}
