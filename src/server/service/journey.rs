use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::journey::{JourneyDetailDto, JourneyDto, JourneyListDto, JourneyPayload},
    server::{
        data::{
            crew::CrewRepository,
            journey::{JourneyParams, JourneyRepository},
            route::RouteRepository,
            station::StationRepository,
            ticket::TicketRepository,
            train::TrainRepository,
        },
        error::{validation::ValidationError, Error},
        service::{crew::crew_dto, route::route_list_dtos, train::train_dto},
        util::time::travel_duration,
    },
};

pub struct JourneyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JourneyService<'a> {
    /// Creates a new instance of [`JourneyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists journeys ordered by departure with the number of tickets still available
    pub async fn list(&self) -> Result<Vec<JourneyListDto>, Error> {
        let journeys = JourneyRepository::new(self.db).get_all().await?;

        journey_list_dtos(self.db, journeys).await
    }

    /// Retrieves a journey with its train, crew and route embedded
    pub async fn get(&self, id: i32) -> Result<JourneyDetailDto, Error> {
        let journey_repo = JourneyRepository::new(self.db);
        let journey = journey_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound("Journey"))?;

        let Some(train) = TrainRepository::new(self.db)
            .get_by_id(journey.train_id)
            .await?
        else {
            return Err(missing_relation(&journey));
        };
        let Some(route) = RouteRepository::new(self.db)
            .get_by_id(journey.route_id)
            .await?
        else {
            return Err(missing_relation(&journey));
        };
        let Some(route) = route_list_dtos(self.db, vec![route]).await?.pop() else {
            return Err(missing_relation(&journey));
        };

        let crew = journey_repo.get_crew(&journey).await?;
        let booked = TicketRepository::new(self.db)
            .count_by_journey(journey.id)
            .await?;

        Ok(JourneyDetailDto {
            id: journey.id,
            available_seats: train.total_capacity() - booked as i64,
            route,
            train: train_dto(train),
            crew: crew.into_iter().map(crew_dto).collect(),
            travel_duration: travel_duration(journey.departure_time, journey.arrival_time),
            departure_time: journey.departure_time,
            arrival_time: journey.arrival_time,
        })
    }

    /// Creates a journey and assigns its crew in one transaction
    pub async fn create(&self, payload: JourneyPayload) -> Result<JourneyDto, Error> {
        let crew_ids = self.validate(&payload, None).await?;

        let txn = self.db.begin().await?;

        let result = async {
            let journey_repo = JourneyRepository::new(&txn);
            let journey = journey_repo.create(journey_params(&payload)).await?;
            journey_repo.set_crew(journey.id, &crew_ids).await?;

            Ok::<_, Error>(journey)
        }
        .await;

        match result {
            Ok(journey) => {
                txn.commit().await?;

                tracing::info!(journey_id = %journey.id, "Created journey");

                Ok(journey_dto(journey, crew_ids))
            }
            Err(e) => {
                txn.rollback().await?;

                Err(e)
            }
        }
    }

    /// Replaces a journey's fields and crew in one transaction
    pub async fn update(&self, id: i32, payload: JourneyPayload) -> Result<JourneyDto, Error> {
        if JourneyRepository::new(self.db).get_by_id(id).await?.is_none() {
            return Err(Error::NotFound("Journey"));
        }

        let crew_ids = self.validate(&payload, Some(id)).await?;

        let txn = self.db.begin().await?;

        let result = async {
            let journey_repo = JourneyRepository::new(&txn);
            let journey = journey_repo
                .update(id, journey_params(&payload))
                .await?
                .ok_or(Error::NotFound("Journey"))?;
            journey_repo.set_crew(journey.id, &crew_ids).await?;

            Ok::<_, Error>(journey)
        }
        .await;

        match result {
            Ok(journey) => {
                txn.commit().await?;

                Ok(journey_dto(journey, crew_ids))
            }
            Err(e) => {
                txn.rollback().await?;

                Err(e)
            }
        }
    }

    /// Deletes a journey along with its tickets & crew assignments
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = JourneyRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Journey"));
        }

        tracing::info!(journey_id = %id, "Deleted journey");

        Ok(())
    }

    /// Validates references and timing, returns the deduplicated crew IDs
    ///
    /// # Arguments
    /// - `journey_id`: Journey being updated, its booked seats must fit the submitted train
    async fn validate(
        &self,
        payload: &JourneyPayload,
        journey_id: Option<i32>,
    ) -> Result<Vec<i32>, Error> {
        if payload.arrival_time <= payload.departure_time {
            return Err(ValidationError::invalid(
                "arrival_time",
                "Arrival time must be after departure time.",
            )
            .into());
        }

        if RouteRepository::new(self.db)
            .get_by_id(payload.route)
            .await?
            .is_none()
        {
            return Err(ValidationError::does_not_exist("route", payload.route).into());
        }
        let Some(train) = TrainRepository::new(self.db)
            .get_by_id(payload.train)
            .await?
        else {
            return Err(ValidationError::does_not_exist("train", payload.train).into());
        };

        if let Some(journey_id) = journey_id {
            if let Some((cargo, seat)) = TicketRepository::new(self.db)
                .max_seat_by_journey(journey_id)
                .await?
            {
                if cargo > train.cargo_num || seat > train.places_in_cargo {
                    return Err(ValidationError::out_of_range(
                        "train",
                        format!(
                            "Booked seat {} in cargo {} does not exist on train {}.",
                            seat, cargo, train.name
                        ),
                    )
                    .into());
                }
            }
        }

        let mut crew_ids = payload.crew.clone();
        crew_ids.sort_unstable();
        crew_ids.dedup();

        let found: Vec<i32> = CrewRepository::new(self.db)
            .get_by_ids(&crew_ids)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();
        if let Some(missing) = crew_ids.iter().find(|id| !found.contains(id)) {
            return Err(ValidationError::does_not_exist("crew", *missing).into());
        }

        Ok(crew_ids)
    }
}

fn journey_params(payload: &JourneyPayload) -> JourneyParams {
    JourneyParams {
        route_id: payload.route,
        train_id: payload.train,
        departure_time: payload.departure_time,
        arrival_time: payload.arrival_time,
    }
}

fn journey_dto(journey: entity::journey::Model, crew: Vec<i32>) -> JourneyDto {
    JourneyDto {
        id: journey.id,
        route: journey.route_id,
        train: journey.train_id,
        travel_duration: travel_duration(journey.departure_time, journey.arrival_time),
        departure_time: journey.departure_time,
        arrival_time: journey.arrival_time,
        crew,
    }
}

fn missing_relation(journey: &entity::journey::Model) -> Error {
    Error::InternalError(format!(
        "Route or train of journey ID {} is missing despite foreign key constraints",
        journey.id
    ))
}

/// Text shown for a journey wherever it is referenced by a ticket
pub(crate) fn journey_label(journey: &JourneyListDto) -> String {
    format!(
        "Journey on {} from {} to {}",
        journey.departure_time, journey.source, journey.destination
    )
}

/// Maps journeys to list entries, loading related rows & ticket counts in batches
pub(crate) async fn journey_list_dtos(
    db: &DatabaseConnection,
    journeys: Vec<entity::journey::Model>,
) -> Result<Vec<JourneyListDto>, Error> {
    let journey_ids: Vec<i32> = journeys.iter().map(|j| j.id).collect();
    let route_ids: Vec<i32> = journeys.iter().map(|j| j.route_id).collect();
    let train_ids: Vec<i32> = journeys.iter().map(|j| j.train_id).collect();

    let routes: HashMap<i32, entity::route::Model> = RouteRepository::new(db)
        .get_by_ids(&route_ids)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();
    let trains: HashMap<i32, entity::train::Model> = TrainRepository::new(db)
        .get_by_ids(&train_ids)
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect();

    let station_ids: Vec<i32> = routes
        .values()
        .flat_map(|r| [r.source_id, r.destination_id])
        .collect();
    let station_names: HashMap<i32, String> = StationRepository::new(db)
        .get_by_ids(&station_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();

    let booked = TicketRepository::new(db)
        .count_by_journeys(&journey_ids)
        .await?;

    let mut dtos = Vec::with_capacity(journeys.len());
    for journey in journeys {
        let (Some(route), Some(train)) = (routes.get(&journey.route_id), trains.get(&journey.train_id))
        else {
            return Err(missing_relation(&journey));
        };

        let station_name = |id: i32| station_names.get(&id).cloned().unwrap_or_default();

        dtos.push(JourneyListDto {
            id: journey.id,
            train_name: train.name.clone(),
            source: station_name(route.source_id),
            destination: station_name(route.destination_id),
            travel_duration: travel_duration(journey.departure_time, journey.arrival_time),
            departure_time: journey.departure_time,
            arrival_time: journey.arrival_time,
            available_tickets: train.total_capacity()
                - booked.get(&journey.id).copied().unwrap_or(0),
        });
    }

    Ok(dtos)
}
