use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CrewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CrewRepository<'a, C> {
    /// Creates a new instance of [`CrewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
    ) -> Result<entity::crew::Model, DbErr> {
        let crew = entity::crew::ActiveModel {
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            ..Default::default()
        };

        crew.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::crew::Model>, DbErr> {
        entity::prelude::Crew::find_by_id(id).one(self.db).await
    }

    /// Returns crew members ordered by last then first name
    pub async fn get_all(&self) -> Result<Vec<entity::crew::Model>, DbErr> {
        entity::prelude::Crew::find()
            .order_by_asc(entity::crew::Column::LastName)
            .order_by_asc(entity::crew::Column::FirstName)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::crew::Model>, DbErr> {
        entity::prelude::Crew::find()
            .filter(entity::crew::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<entity::crew::Model>, DbErr> {
        entity::prelude::Crew::find()
            .filter(entity::crew::Column::FirstName.eq(first_name))
            .filter(entity::crew::Column::LastName.eq(last_name))
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        first_name: String,
        last_name: String,
    ) -> Result<Option<entity::crew::Model>, DbErr> {
        let Some(crew) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut crew_am = crew.into_active_model();
        crew_am.first_name = ActiveValue::Set(first_name);
        crew_am.last_name = ActiveValue::Set(last_name);

        Ok(Some(crew_am.update(self.db).await?))
    }

    /// Deletes a crew member along with their journey assignments
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Crew::delete_by_id(id).exec(self.db).await
    }
}
