pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_user_table;
mod m20251020_000002_create_task_item_table;
mod m20251020_000003_create_comment_table;
mod m20251020_000004_create_friendship_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_user_table::Migration),
            Box::new(m20251020_000002_create_task_item_table::Migration),
            Box::new(m20251020_000003_create_comment_table::Migration),
            Box::new(m20251020_000004_create_friendship_table::Migration),
        ]
    }
}
