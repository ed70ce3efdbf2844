use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskItem::Table)
                    .if_not_exists()
                    .col(pk_auto(TaskItem::Id))
                    .col(string(TaskItem::Title))
                    .col(boolean(TaskItem::IsCompleted).default(false))
                    .col(integer(TaskItem::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_item_user_id")
                            .from(TaskItem::Table, TaskItem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_task_item_user_id")
                    .table(TaskItem::Table)
                    .col(TaskItem::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TaskItem {
    Table,
    Id,
    Title,
    IsCompleted,
    UserId,
}
