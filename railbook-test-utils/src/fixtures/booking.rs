use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_JOURNEY_HOURS, error::TestError, TestContext};

/// Departure time of journeys created by fixtures
pub fn departure_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .expect("valid fixture departure time")
}

impl TestContext {
    pub fn booking<'a>(&'a mut self) -> BookingFixtures<'a> {
        BookingFixtures { setup: self }
    }
}

pub struct BookingFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> BookingFixtures<'a> {
    pub async fn insert_journey(
        &self,
        route_id: i32,
        train_id: i32,
        departure_time: NaiveDateTime,
        arrival_time: NaiveDateTime,
    ) -> Result<entity::journey::Model, TestError> {
        Ok(
            entity::prelude::Journey::insert(entity::journey::ActiveModel {
                route_id: ActiveValue::Set(route_id),
                train_id: ActiveValue::Set(train_id),
                departure_time: ActiveValue::Set(departure_time),
                arrival_time: ActiveValue::Set(arrival_time),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a journey on a new route with a new train of the given dimensions
    ///
    /// # Returns
    /// - `(journey, train)`
    pub async fn insert_mock_journey(
        &mut self,
        cargo_num: i32,
        places_in_cargo: i32,
    ) -> Result<(entity::journey::Model, entity::train::Model), TestError> {
        let (route, _, _) = self.setup.network().insert_mock_route().await?;
        let (train, _) = self
            .setup
            .fleet()
            .insert_mock_train(cargo_num, places_in_cargo)
            .await?;

        let departure = departure_time();
        let arrival = departure + Duration::hours(TEST_JOURNEY_HOURS);
        let journey = self
            .insert_journey(route.id, train.id, departure, arrival)
            .await?;

        Ok((journey, train))
    }

    pub async fn assign_crew(
        &self,
        journey_id: i32,
        crew_id: i32,
    ) -> Result<entity::journey_crew::Model, TestError> {
        Ok(
            entity::prelude::JourneyCrew::insert(entity::journey_crew::ActiveModel {
                journey_id: ActiveValue::Set(journey_id),
                crew_id: ActiveValue::Set(crew_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_order(
        &self,
        user_id: i32,
    ) -> Result<entity::booking_order::Model, TestError> {
        Ok(
            entity::prelude::BookingOrder::insert(entity::booking_order::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_ticket(
        &self,
        journey_id: i32,
        order_id: i32,
        cargo: i32,
        seat: i32,
    ) -> Result<entity::ticket::Model, TestError> {
        Ok(
            entity::prelude::Ticket::insert(entity::ticket::ActiveModel {
                journey_id: ActiveValue::Set(journey_id),
                order_id: ActiveValue::Set(order_id),
                cargo: ActiveValue::Set(cargo),
                seat: ActiveValue::Set(seat),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
