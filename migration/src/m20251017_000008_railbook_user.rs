use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RailbookUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RailbookUser::Id))
                    .col(string_uniq(RailbookUser::Email))
                    .col(string(RailbookUser::PasswordHash))
                    .col(string_len(RailbookUser::FirstName, 150))
                    .col(string_len(RailbookUser::LastName, 150))
                    .col(boolean(RailbookUser::IsStaff))
                    .col(timestamp(RailbookUser::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RailbookUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RailbookUser {
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    IsStaff,
    CreatedAt,
}
