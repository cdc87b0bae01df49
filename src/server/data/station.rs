use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct StationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StationRepository<'a, C> {
    /// Creates a new instance of [`StationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<entity::station::Model, DbErr> {
        let station = entity::station::ActiveModel {
            name: ActiveValue::Set(name),
            latitude: ActiveValue::Set(latitude),
            longitude: ActiveValue::Set(longitude),
            ..Default::default()
        };

        station.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::station::Model>, DbErr> {
        entity::prelude::Station::find_by_id(id).one(self.db).await
    }

    /// Returns every station ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::station::Model>, DbErr> {
        entity::prelude::Station::find()
            .order_by_asc(entity::station::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::station::Model>, DbErr> {
        entity::prelude::Station::find()
            .filter(entity::station::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::station::Model>, DbErr> {
        entity::prelude::Station::find()
            .filter(entity::station::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn find_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<entity::station::Model>, DbErr> {
        entity::prelude::Station::find()
            .filter(entity::station::Column::Latitude.eq(latitude))
            .filter(entity::station::Column::Longitude.eq(longitude))
            .one(self.db)
            .await
    }

    /// Replaces every field of a station, returns `None` if the station does not exist
    pub async fn update(
        &self,
        id: i32,
        name: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<entity::station::Model>, DbErr> {
        let Some(station) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut station_am = station.into_active_model();
        station_am.name = ActiveValue::Set(name);
        station_am.latitude = ActiveValue::Set(latitude);
        station_am.longitude = ActiveValue::Set(longitude);

        Ok(Some(station_am.update(self.db).await?))
    }

    /// Deletes a station along with its routes
    ///
    /// Returns OK regardless of station existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Station::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
