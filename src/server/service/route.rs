use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::route::{RouteDetailDto, RouteDto, RouteListDto, RoutePayload},
    server::{
        data::{route::RouteRepository, station::StationRepository},
        error::{validation::ValidationError, Error},
        service::station::station_dto,
    },
};

pub struct RouteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteService<'a> {
    /// Creates a new instance of [`RouteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists routes with their stations shown by name
    pub async fn list(&self) -> Result<Vec<RouteListDto>, Error> {
        let routes = RouteRepository::new(self.db).get_all().await?;

        route_list_dtos(self.db, routes).await
    }

    /// Retrieves a route with both stations embedded
    pub async fn get(&self, id: i32) -> Result<RouteDetailDto, Error> {
        let route = RouteRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound("Route"))?;

        let station_repo = StationRepository::new(self.db);
        let source = station_repo.get_by_id(route.source_id).await?;
        let destination = station_repo.get_by_id(route.destination_id).await?;

        let (Some(source), Some(destination)) = (source, destination) else {
            return Err(Error::InternalError(format!(
                "Stations of route ID {} are missing despite foreign key constraints",
                route.id
            )));
        };

        Ok(RouteDetailDto {
            id: route.id,
            source: station_dto(source),
            destination: station_dto(destination),
            distance: route.distance,
        })
    }

    pub async fn create(&self, payload: RoutePayload) -> Result<RouteDto, Error> {
        self.validate(&payload, None).await?;

        let route = RouteRepository::new(self.db)
            .create(payload.source, payload.destination, payload.distance)
            .await?;

        tracing::info!(route_id = %route.id, "Created route");

        Ok(route_dto(route))
    }

    pub async fn update(&self, id: i32, payload: RoutePayload) -> Result<RouteDto, Error> {
        let route_repo = RouteRepository::new(self.db);
        if route_repo.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound("Route"));
        }

        self.validate(&payload, Some(id)).await?;

        let route = route_repo
            .update(id, payload.source, payload.destination, payload.distance)
            .await?
            .ok_or(Error::NotFound("Route"))?;

        Ok(route_dto(route))
    }

    /// Deletes a route along with its journeys
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = RouteRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Route"));
        }

        tracing::info!(route_id = %id, "Deleted route");

        Ok(())
    }

    async fn validate(&self, payload: &RoutePayload, route_id: Option<i32>) -> Result<(), Error> {
        if payload.source == payload.destination {
            return Err(ValidationError::invalid(
                "destination",
                "Destination must differ from the source station.",
            )
            .into());
        }
        if payload.distance < 1 {
            return Err(ValidationError::out_of_range(
                "distance",
                "Ensure this value is greater than or equal to 1.",
            )
            .into());
        }

        let station_repo = StationRepository::new(self.db);
        if station_repo.get_by_id(payload.source).await?.is_none() {
            return Err(ValidationError::does_not_exist("source", payload.source).into());
        }
        if station_repo.get_by_id(payload.destination).await?.is_none() {
            return Err(ValidationError::does_not_exist("destination", payload.destination).into());
        }

        if let Some(existing) = RouteRepository::new(self.db)
            .find_by_stations(payload.source, payload.destination)
            .await?
        {
            if Some(existing.id) != route_id {
                return Err(ValidationError::conflict(
                    "non_field_errors",
                    "The fields source, destination must make a unique set.",
                )
                .into());
            }
        }

        Ok(())
    }
}

fn route_dto(route: entity::route::Model) -> RouteDto {
    RouteDto {
        id: route.id,
        source: route.source_id,
        destination: route.destination_id,
        distance: route.distance,
    }
}

/// Maps routes to list entries, loading every referenced station in one query
pub(crate) async fn route_list_dtos(
    db: &DatabaseConnection,
    routes: Vec<entity::route::Model>,
) -> Result<Vec<RouteListDto>, Error> {
    let station_ids: Vec<i32> = routes
        .iter()
        .flat_map(|r| [r.source_id, r.destination_id])
        .collect();
    let station_names: HashMap<i32, String> = StationRepository::new(db)
        .get_by_ids(&station_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();

    let station_name = |id: i32| station_names.get(&id).cloned().unwrap_or_default();

    Ok(routes
        .into_iter()
        .map(|route| RouteListDto {
            id: route.id,
            source: station_name(route.source_id),
            destination: station_name(route.destination_id),
            distance: route.distance,
        })
        .collect())
}
