use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000008_railbook_user::RailbookUser;

static IDX_BOOKING_ORDER_USER_ID: &str = "idx-booking_order-user_id";
static FK_BOOKING_ORDER_USER_ID: &str = "fk-booking_order-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingOrder::Id))
                    .col(integer(BookingOrder::UserId))
                    .col(timestamp(BookingOrder::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKING_ORDER_USER_ID)
                    .table(BookingOrder::Table)
                    .col(BookingOrder::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_ORDER_USER_ID)
                    .from_tbl(BookingOrder::Table)
                    .from_col(BookingOrder::UserId)
                    .to_tbl(RailbookUser::Table)
                    .to_col(RailbookUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOKING_ORDER_USER_ID)
                    .table(BookingOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOKING_ORDER_USER_ID)
                    .table(BookingOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BookingOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BookingOrder {
    Table,
    Id,
    UserId,
    CreatedAt,
}
