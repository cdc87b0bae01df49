use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000006_journey::Journey, m20251017_000009_booking_order::BookingOrder,
};

static IDX_TICKET_JOURNEY_SEAT: &str = "journey_seat__unique";
static IDX_TICKET_ORDER_ID: &str = "idx-ticket-order_id";
static FK_TICKET_JOURNEY_ID: &str = "fk-ticket-journey_id";
static FK_TICKET_ORDER_ID: &str = "fk-ticket-order_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(integer(Ticket::JourneyId))
                    .col(integer(Ticket::OrderId))
                    .col(integer(Ticket::Cargo))
                    .col(integer(Ticket::Seat))
                    .to_owned(),
            )
            .await?;

        // A seat can only be sold once per journey, concurrent bookings race on this index
        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_JOURNEY_SEAT)
                    .table(Ticket::Table)
                    .col(Ticket::JourneyId)
                    .col(Ticket::Cargo)
                    .col(Ticket::Seat)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_ORDER_ID)
                    .table(Ticket::Table)
                    .col(Ticket::OrderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_JOURNEY_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::JourneyId)
                    .to_tbl(Journey::Table)
                    .to_col(Journey::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_ORDER_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::OrderId)
                    .to_tbl(BookingOrder::Table)
                    .to_col(BookingOrder::Id)
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
                    .name(FK_TICKET_ORDER_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_JOURNEY_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_ORDER_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_JOURNEY_SEAT)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ticket {
    Table,
    Id,
    JourneyId,
    OrderId,
    Cargo,
    Seat,
}
