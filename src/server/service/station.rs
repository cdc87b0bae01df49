use sea_orm::DatabaseConnection;

use crate::{
    model::station::{StationDto, StationPayload},
    server::{
        data::station::StationRepository,
        error::{validation::ValidationError, Error},
    },
};

pub struct StationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationService<'a> {
    /// Creates a new instance of [`StationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<StationDto>, Error> {
        let stations = StationRepository::new(self.db).get_all().await?;

        Ok(stations.into_iter().map(station_dto).collect())
    }

    pub async fn get(&self, id: i32) -> Result<StationDto, Error> {
        let station = StationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound("Station"))?;

        Ok(station_dto(station))
    }

    pub async fn create(&self, payload: StationPayload) -> Result<StationDto, Error> {
        self.validate(&payload, None).await?;

        let station = StationRepository::new(self.db)
            .create(payload.name, payload.latitude, payload.longitude)
            .await?;

        tracing::info!(station_id = %station.id, "Created station {}", station.name);

        Ok(station_dto(station))
    }

    pub async fn update(&self, id: i32, payload: StationPayload) -> Result<StationDto, Error> {
        let station_repo = StationRepository::new(self.db);
        if station_repo.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound("Station"));
        }

        self.validate(&payload, Some(id)).await?;

        let station = station_repo
            .update(id, payload.name, payload.latitude, payload.longitude)
            .await?
            .ok_or(Error::NotFound("Station"))?;

        Ok(station_dto(station))
    }

    /// Deletes a station, routes from or to it are deleted as well
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = StationRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Station"));
        }

        tracing::info!(station_id = %id, "Deleted station");

        Ok(())
    }

    /// Checks coordinate ranges & uniqueness, `station_id` is the station being replaced
    async fn validate(&self, payload: &StationPayload, station_id: Option<i32>) -> Result<(), Error> {
        if payload.name.trim().is_empty() {
            return Err(ValidationError::invalid("name", "This field may not be blank.").into());
        }
        if !(-90.0..=90.0).contains(&payload.latitude) {
            return Err(ValidationError::out_of_range(
                "latitude",
                "Ensure latitude is between -90 and 90.",
            )
            .into());
        }
        if !(-180.0..=180.0).contains(&payload.longitude) {
            return Err(ValidationError::out_of_range(
                "longitude",
                "Ensure longitude is between -180 and 180.",
            )
            .into());
        }

        let station_repo = StationRepository::new(self.db);

        if let Some(existing) = station_repo.find_by_name(&payload.name).await? {
            if Some(existing.id) != station_id {
                return Err(ValidationError::conflict(
                    "name",
                    "station with this name already exists.",
                )
                .into());
            }
        }

        if let Some(existing) = station_repo
            .find_by_coordinates(payload.latitude, payload.longitude)
            .await?
        {
            if Some(existing.id) != station_id {
                return Err(ValidationError::conflict(
                    "non_field_errors",
                    "The fields latitude, longitude must make a unique set.",
                )
                .into());
            }
        }

        Ok(())
    }
}

pub(crate) fn station_dto(station: entity::station::Model) -> StationDto {
    StationDto {
        id: station.id,
        name: station.name,
        latitude: station.latitude,
        longitude: station.longitude,
    }
}
