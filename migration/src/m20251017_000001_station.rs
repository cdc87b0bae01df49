use sea_orm_migration::{prelude::*, schema::*};

static IDX_STATION_COORDINATES: &str = "idx-station-latitude-longitude";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Station::Table)
                    .if_not_exists()
                    .col(pk_auto(Station::Id))
                    .col(string_len_uniq(Station::Name, 100))
                    .col(double(Station::Latitude))
                    .col(double(Station::Longitude))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STATION_COORDINATES)
                    .table(Station::Table)
                    .col(Station::Latitude)
                    .col(Station::Longitude)
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
                    .name(IDX_STATION_COORDINATES)
                    .table(Station::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Station::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Station {
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
}
