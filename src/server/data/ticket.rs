use std::collections::HashMap;

use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Column values of a ticket, shared by create & update
pub struct TicketParams {
    pub journey_id: i32,
    pub order_id: i32,
    pub cargo: i32,
    pub seat: i32,
}

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    /// Creates a new instance of [`TicketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TicketParams) -> Result<entity::ticket::Model, DbErr> {
        let ticket = entity::ticket::ActiveModel {
            journey_id: ActiveValue::Set(params.journey_id),
            order_id: ActiveValue::Set(params.order_id),
            cargo: ActiveValue::Set(params.cargo),
            seat: ActiveValue::Set(params.seat),
            ..Default::default()
        };

        ticket.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find_by_id(id).one(self.db).await
    }

    /// Returns the ticket only if its order belongs to the provided user
    pub async fn get_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find_by_id(id)
            .inner_join(entity::prelude::BookingOrder)
            .filter(entity::booking_order::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find()
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns every ticket of orders owned by the provided user
    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Vec<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find()
            .inner_join(entity::prelude::BookingOrder)
            .filter(entity::booking_order::Column::UserId.eq(user_id))
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_order_ids(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::OrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the ticket holding a seat on a journey
    pub async fn find_by_seat(
        &self,
        journey_id: i32,
        cargo: i32,
        seat: i32,
    ) -> Result<Option<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::JourneyId.eq(journey_id))
            .filter(entity::ticket::Column::Cargo.eq(cargo))
            .filter(entity::ticket::Column::Seat.eq(seat))
            .one(self.db)
            .await
    }

    pub async fn count_by_journey(&self, journey_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::JourneyId.eq(journey_id))
            .count(self.db)
            .await
    }

    /// Counts tickets per journey, journeys without tickets are absent from the map
    pub async fn count_by_journeys(&self, journey_ids: &[i32]) -> Result<HashMap<i32, i64>, DbErr> {
        let counts: Vec<(i32, i64)> = entity::prelude::Ticket::find()
            .select_only()
            .column(entity::ticket::Column::JourneyId)
            .expr_as(
                Func::count(Expr::col((
                    entity::prelude::Ticket,
                    entity::ticket::Column::Id,
                ))),
                "tickets",
            )
            .filter(entity::ticket::Column::JourneyId.is_in(journey_ids.iter().copied()))
            .group_by(entity::ticket::Column::JourneyId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts.into_iter().collect())
    }

    /// Highest booked cargo & seat across every journey of a train
    ///
    /// # Returns
    /// - `Ok(Some((cargo, seat)))` - Largest cargo and largest seat, not necessarily of the same ticket
    /// - `Ok(None)` - Nothing is booked on the train
    pub async fn max_seat_by_train(&self, train_id: i32) -> Result<Option<(i32, i32)>, DbErr> {
        self.max_seat(entity::journey::Column::TrainId.eq(train_id))
            .await
    }

    /// Highest booked cargo & seat on a journey, `None` when nothing is booked
    pub async fn max_seat_by_journey(&self, journey_id: i32) -> Result<Option<(i32, i32)>, DbErr> {
        self.max_seat(entity::ticket::Column::JourneyId.eq(journey_id))
            .await
    }

    async fn max_seat(&self, condition: Expr) -> Result<Option<(i32, i32)>, DbErr> {
        let row: Option<(Option<i32>, Option<i32>)> = entity::prelude::Ticket::find()
            .select_only()
            .expr_as(
                Func::max(Expr::col((
                    entity::prelude::Ticket,
                    entity::ticket::Column::Cargo,
                ))),
                "cargo",
            )
            .expr_as(
                Func::max(Expr::col((
                    entity::prelude::Ticket,
                    entity::ticket::Column::Seat,
                ))),
                "seat",
            )
            .inner_join(entity::prelude::Journey)
            .filter(condition)
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(match row {
            Some((Some(cargo), Some(seat))) => Some((cargo, seat)),
            _ => None,
        })
    }

    pub async fn update(
        &self,
        id: i32,
        params: TicketParams,
    ) -> Result<Option<entity::ticket::Model>, DbErr> {
        let Some(ticket) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut ticket_am = ticket.into_active_model();
        ticket_am.journey_id = ActiveValue::Set(params.journey_id);
        ticket_am.order_id = ActiveValue::Set(params.order_id);
        ticket_am.cargo = ActiveValue::Set(params.cargo);
        ticket_am.seat = ActiveValue::Set(params.seat);

        Ok(Some(ticket_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ticket::delete_by_id(id).exec(self.db).await
    }

    pub async fn delete_by_order(&self, order_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ticket::delete_many()
            .filter(entity::ticket::Column::OrderId.eq(order_id))
            .exec(self.db)
            .await
    }
}
