use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct TrainTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainTypeRepository<'a, C> {
    /// Creates a new instance of [`TrainTypeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<entity::train_type::Model, DbErr> {
        let train_type = entity::train_type::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        };

        train_type.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::train_type::Model>, DbErr> {
        entity::prelude::TrainType::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::train_type::Model>, DbErr> {
        entity::prelude::TrainType::find()
            .order_by_asc(entity::train_type::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::train_type::Model>, DbErr> {
        entity::prelude::TrainType::find()
            .filter(entity::train_type::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::train_type::Model>, DbErr> {
        entity::prelude::TrainType::find()
            .filter(entity::train_type::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::train_type::Model>, DbErr> {
        let Some(train_type) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut train_type_am = train_type.into_active_model();
        train_type_am.name = ActiveValue::Set(name);

        Ok(Some(train_type_am.update(self.db).await?))
    }

    /// Deletes a train type, trains of that type are deleted along with it
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainType::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
