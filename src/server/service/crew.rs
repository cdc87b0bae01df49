use sea_orm::DatabaseConnection;

use crate::{
    model::crew::{CrewDto, CrewPayload},
    server::{
        data::crew::CrewRepository,
        error::{validation::ValidationError, Error},
    },
};

pub struct CrewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewService<'a> {
    /// Creates a new instance of [`CrewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<CrewDto>, Error> {
        let crew = CrewRepository::new(self.db).get_all().await?;

        Ok(crew.into_iter().map(crew_dto).collect())
    }

    pub async fn get(&self, id: i32) -> Result<CrewDto, Error> {
        let crew = CrewRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound("Crew"))?;

        Ok(crew_dto(crew))
    }

    pub async fn create(&self, payload: CrewPayload) -> Result<CrewDto, Error> {
        self.validate(&payload, None).await?;

        let crew = CrewRepository::new(self.db)
            .create(payload.first_name, payload.last_name)
            .await?;

        tracing::info!(crew_id = %crew.id, "Created crew member {}", crew.full_name());

        Ok(crew_dto(crew))
    }

    pub async fn update(&self, id: i32, payload: CrewPayload) -> Result<CrewDto, Error> {
        let crew_repo = CrewRepository::new(self.db);
        if crew_repo.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound("Crew"));
        }

        self.validate(&payload, Some(id)).await?;

        let crew = crew_repo
            .update(id, payload.first_name, payload.last_name)
            .await?
            .ok_or(Error::NotFound("Crew"))?;

        Ok(crew_dto(crew))
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = CrewRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Crew"));
        }

        tracing::info!(crew_id = %id, "Deleted crew member");

        Ok(())
    }

    async fn validate(&self, payload: &CrewPayload, crew_id: Option<i32>) -> Result<(), Error> {
        if payload.first_name.trim().is_empty() {
            return Err(
                ValidationError::invalid("first_name", "This field may not be blank.").into(),
            );
        }
        if payload.last_name.trim().is_empty() {
            return Err(
                ValidationError::invalid("last_name", "This field may not be blank.").into(),
            );
        }

        if let Some(existing) = CrewRepository::new(self.db)
            .find_by_name(&payload.first_name, &payload.last_name)
            .await?
        {
            if Some(existing.id) != crew_id {
                return Err(ValidationError::conflict(
                    "non_field_errors",
                    "The fields first_name, last_name must make a unique set.",
                )
                .into());
            }
        }

        Ok(())
    }
}

pub(crate) fn crew_dto(crew: entity::crew::Model) -> CrewDto {
    CrewDto {
        id: crew.id,
        full_name: crew.full_name(),
    }
}
