use sea_orm_migration::{prelude::*, schema::*};

static IDX_CREW_FULL_NAME: &str = "idx-crew-first_name-last_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Crew::Table)
                    .if_not_exists()
                    .col(pk_auto(Crew::Id))
                    .col(string_len(Crew::FirstName, 100))
                    .col(string_len(Crew::LastName, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CREW_FULL_NAME)
                    .table(Crew::Table)
                    .col(Crew::FirstName)
                    .col(Crew::LastName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CREW_FULL_NAME)
                    .table(Crew::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Crew::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Crew {
    Table,
    Id,
    FirstName,
    LastName,
}
