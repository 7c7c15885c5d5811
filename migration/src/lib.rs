pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_users_table;
mod m20260810_000002_create_posts_and_tags;
mod m20260810_000003_create_comments_table;
mod m20260810_000004_create_votes_table;
mod m20260810_000005_create_saved_posts_table;
mod m20260810_000006_create_notifications_table;
mod m20260810_000007_create_reports_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_users_table::Migration),
            Box::new(m20260810_000002_create_posts_and_tags::Migration),
            Box::new(m20260810_000003_create_comments_table::Migration),
            Box::new(m20260810_000004_create_votes_table::Migration),
            Box::new(m20260810_000005_create_saved_posts_table::Migration),
            Box::new(m20260810_000006_create_notifications_table::Migration),
            Box::new(m20260810_000007_create_reports_table::Migration),
        ]
    }
}
