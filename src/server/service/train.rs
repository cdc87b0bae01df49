use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::train::{TrainDto, TrainListDto, TrainPayload},
    server::{
        data::{
            ticket::TicketRepository,
            train::{TrainParams, TrainRepository},
            train_type::TrainTypeRepository,
        },
        error::{validation::ValidationError, Error},
        util::query::parse_id_list,
    },
};

/// Optional filters applied when listing trains
#[derive(Default)]
pub struct TrainFilter {
    /// Case-insensitive substring of the train name
    pub name: Option<String>,
    /// Comma separated train type IDs
    pub train_types: Option<String>,
}

pub struct TrainService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainService<'a> {
    /// Creates a new instance of [`TrainService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists trains matching the filter with their train type shown by name
    pub async fn list(&self, filter: TrainFilter) -> Result<Vec<TrainListDto>, Error> {
        let train_type_ids = filter
            .train_types
            .as_deref()
            .map(|ids| parse_id_list(ids, "train_types"))
            .transpose()?;

        let trains = TrainRepository::new(self.db)
            .get_all(train_type_ids.as_deref(), filter.name.as_deref())
            .await?;

        let type_ids: Vec<i32> = trains.iter().map(|t| t.train_type_id).collect();
        let type_names: HashMap<i32, String> = TrainTypeRepository::new(self.db)
            .get_by_ids(&type_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        Ok(trains
            .into_iter()
            .map(|train| {
                let type_name = type_names
                    .get(&train.train_type_id)
                    .cloned()
                    .unwrap_or_default();
                train_list_dto(train, type_name)
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<TrainListDto, Error> {
        let train = TrainRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound("Train"))?;

        let type_name = TrainTypeRepository::new(self.db)
            .get_by_id(train.train_type_id)
            .await?
            .map(|t| t.name)
            .unwrap_or_default();

        Ok(train_list_dto(train, type_name))
    }

    pub async fn create(&self, payload: TrainPayload) -> Result<TrainDto, Error> {
        self.validate(&payload, None).await?;

        let train = TrainRepository::new(self.db)
            .create(train_params(payload))
            .await?;

        tracing::info!(train_id = %train.id, "Created train {}", train.name);

        Ok(train_dto(train))
    }

    pub async fn update(&self, id: i32, payload: TrainPayload) -> Result<TrainDto, Error> {
        let train_repo = TrainRepository::new(self.db);
        if train_repo.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound("Train"));
        }

        self.validate(&payload, Some(id)).await?;
        self.check_booked_seats(id, &payload).await?;

        let train = train_repo
            .update(id, train_params(payload))
            .await?
            .ok_or(Error::NotFound("Train"))?;

        Ok(train_dto(train))
    }

    /// Deletes a train along with its journeys and their tickets
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = TrainRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Train"));
        }

        tracing::info!(train_id = %id, "Deleted train");

        Ok(())
    }

    /// Rejects dimensions that would leave booked tickets outside the train
    async fn check_booked_seats(&self, id: i32, payload: &TrainPayload) -> Result<(), Error> {
        let Some((cargo, seat)) = TicketRepository::new(self.db)
            .max_seat_by_train(id)
            .await?
        else {
            return Ok(());
        };

        if cargo > payload.cargo_num {
            return Err(ValidationError::out_of_range(
                "cargo_num",
                format!("Tickets are booked in cargo {}.", cargo),
            )
            .into());
        }
        if seat > payload.places_in_cargo {
            return Err(ValidationError::out_of_range(
                "places_in_cargo",
                format!("Tickets are booked up to seat {}.", seat),
            )
            .into());
        }

        Ok(())
    }

    async fn validate(&self, payload: &TrainPayload, train_id: Option<i32>) -> Result<(), Error> {
        if payload.name.trim().is_empty() {
            return Err(ValidationError::invalid("name", "This field may not be blank.").into());
        }
        if payload.cargo_num < 1 {
            return Err(ValidationError::out_of_range(
                "cargo_num",
                "Ensure this value is greater than or equal to 1.",
            )
            .into());
        }
        if payload.places_in_cargo < 1 {
            return Err(ValidationError::out_of_range(
                "places_in_cargo",
                "Ensure this value is greater than or equal to 1.",
            )
            .into());
        }

        if TrainTypeRepository::new(self.db)
            .get_by_id(payload.train_type)
            .await?
            .is_none()
        {
            return Err(ValidationError::does_not_exist("train_type", payload.train_type).into());
        }

        if let Some(existing) = TrainRepository::new(self.db)
            .find_by_name(&payload.name)
            .await?
        {
            if Some(existing.id) != train_id {
                return Err(ValidationError::conflict(
                    "name",
                    "train with this name already exists.",
                )
                .into());
            }
        }

        Ok(())
    }
}

fn train_params(payload: TrainPayload) -> TrainParams {
    TrainParams {
        name: payload.name,
        cargo_num: payload.cargo_num,
        places_in_cargo: payload.places_in_cargo,
        train_type_id: payload.train_type,
    }
}

pub(crate) fn train_dto(train: entity::train::Model) -> TrainDto {
    TrainDto {
        id: train.id,
        total_capacity: train.total_capacity(),
        name: train.name,
        cargo_num: train.cargo_num,
        places_in_cargo: train.places_in_cargo,
        train_type: train.train_type_id,
    }
}

fn train_list_dto(train: entity::train::Model, train_type: String) -> TrainListDto {
    TrainListDto {
        id: train.id,
        total_capacity: train.total_capacity(),
        name: train.name,
        cargo_num: train.cargo_num,
        places_in_cargo: train.places_in_cargo,
        train_type,
    }
}
