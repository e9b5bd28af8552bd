use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoItem::Table)
                    .if_not_exists()
                    .col(pk_auto(TodoItem::Id))
                    .col(string_len(TodoItem::Title, 100))
                    .col(boolean_null(TodoItem::IsCompleted))
                    .col(timestamp_with_time_zone(TodoItem::CreatedDate))
                    .col(timestamp_with_time_zone(TodoItem::DueDate))
                    .col(timestamp_with_time_zone_null(TodoItem::CompletedDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TodoItem {
    Table,
    Id,
    Title,
    IsCompleted,
    CreatedDate,
    DueDate,
    CompletedDate,
}
