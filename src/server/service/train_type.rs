use sea_orm::DatabaseConnection;

use crate::{
    model::train::{TrainTypeDto, TrainTypePayload},
    server::{
        data::train_type::TrainTypeRepository,
        error::{validation::ValidationError, Error},
    },
};

pub struct TrainTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainTypeService<'a> {
    /// Creates a new instance of [`TrainTypeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<TrainTypeDto>, Error> {
        let train_types = TrainTypeRepository::new(self.db).get_all().await?;

        Ok(train_types.into_iter().map(train_type_dto).collect())
    }

    pub async fn get(&self, id: i32) -> Result<TrainTypeDto, Error> {
        let train_type = TrainTypeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound("Train type"))?;

        Ok(train_type_dto(train_type))
    }

    pub async fn create(&self, payload: TrainTypePayload) -> Result<TrainTypeDto, Error> {
        self.validate(&payload, None).await?;

        let train_type = TrainTypeRepository::new(self.db)
            .create(payload.name)
            .await?;

        tracing::info!(train_type_id = %train_type.id, "Created train type {}", train_type.name);

        Ok(train_type_dto(train_type))
    }

    pub async fn update(&self, id: i32, payload: TrainTypePayload) -> Result<TrainTypeDto, Error> {
        let train_type_repo = TrainTypeRepository::new(self.db);
        if train_type_repo.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound("Train type"));
        }

        self.validate(&payload, Some(id)).await?;

        let train_type = train_type_repo
            .update(id, payload.name)
            .await?
            .ok_or(Error::NotFound("Train type"))?;

        Ok(train_type_dto(train_type))
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = TrainTypeRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Train type"));
        }

        tracing::info!(train_type_id = %id, "Deleted train type");

        Ok(())
    }

    async fn validate(
        &self,
        payload: &TrainTypePayload,
        train_type_id: Option<i32>,
    ) -> Result<(), Error> {
        if payload.name.trim().is_empty() {
            return Err(ValidationError::invalid("name", "This field may not be blank.").into());
        }

        if let Some(existing) = TrainTypeRepository::new(self.db)
            .find_by_name(&payload.name)
            .await?
        {
            if Some(existing.id) != train_type_id {
                return Err(ValidationError::conflict(
                    "name",
                    "train type with this name already exists.",
                )
                .into());
            }
        }

        Ok(())
    }
}

fn train_type_dto(train_type: entity::train_type::Model) -> TrainTypeDto {
    TrainTypeDto {
        id: train_type.id,
        name: train_type.name,
    }
}
