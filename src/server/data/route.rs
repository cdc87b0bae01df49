use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct RouteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RouteRepository<'a, C> {
    /// Creates a new instance of [`RouteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        source_id: i32,
        destination_id: i32,
        distance: i32,
    ) -> Result<entity::route::Model, DbErr> {
        let route = entity::route::ActiveModel {
            source_id: ActiveValue::Set(source_id),
            destination_id: ActiveValue::Set(destination_id),
            distance: ActiveValue::Set(distance),
            ..Default::default()
        };

        route.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::route::Model>, DbErr> {
        entity::prelude::Route::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::route::Model>, DbErr> {
        entity::prelude::Route::find()
            .order_by_asc(entity::route::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::route::Model>, DbErr> {
        entity::prelude::Route::find()
            .filter(entity::route::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn find_by_stations(
        &self,
        source_id: i32,
        destination_id: i32,
    ) -> Result<Option<entity::route::Model>, DbErr> {
        entity::prelude::Route::find()
            .filter(entity::route::Column::SourceId.eq(source_id))
            .filter(entity::route::Column::DestinationId.eq(destination_id))
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        source_id: i32,
        destination_id: i32,
        distance: i32,
    ) -> Result<Option<entity::route::Model>, DbErr> {
        let Some(route) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut route_am = route.into_active_model();
        route_am.source_id = ActiveValue::Set(source_id);
        route_am.destination_id = ActiveValue::Set(destination_id);
        route_am.distance = ActiveValue::Set(distance);

        Ok(Some(route_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Route::delete_by_id(id).exec(self.db).await
    }
}
