use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Column values of a train, shared by create & update
pub struct TrainParams {
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type_id: i32,
}

pub struct TrainRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainRepository<'a, C> {
    /// Creates a new instance of [`TrainRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TrainParams) -> Result<entity::train::Model, DbErr> {
        let train = entity::train::ActiveModel {
            name: ActiveValue::Set(params.name),
            cargo_num: ActiveValue::Set(params.cargo_num),
            places_in_cargo: ActiveValue::Set(params.places_in_cargo),
            train_type_id: ActiveValue::Set(params.train_type_id),
            ..Default::default()
        };

        train.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::train::Model>, DbErr> {
        entity::prelude::Train::find_by_id(id).one(self.db).await
    }

    /// Returns trains ordered by name
    ///
    /// # Arguments
    /// - `train_type_ids`: Restrict to trains of these types
    /// - `name`: Case-insensitive substring the train name must contain
    pub async fn get_all(
        &self,
        train_type_ids: Option<&[i32]>,
        name: Option<&str>,
    ) -> Result<Vec<entity::train::Model>, DbErr> {
        let mut query = entity::prelude::Train::find();

        if let Some(ids) = train_type_ids {
            query = query.filter(entity::train::Column::TrainTypeId.is_in(ids.iter().copied()));
        }

        if let Some(name) = name {
            let lowered_name = Func::lower(Expr::col((
                entity::prelude::Train,
                entity::train::Column::Name,
            )));
            query = query.filter(sea_orm::sea_query::ExprTrait::like(
                lowered_name,
                contains_pattern(name),
            ));
        }

        query
            .order_by_asc(entity::train::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::train::Model>, DbErr> {
        entity::prelude::Train::find()
            .filter(entity::train::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::train::Model>, DbErr> {
        entity::prelude::Train::find()
            .filter(entity::train::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: TrainParams,
    ) -> Result<Option<entity::train::Model>, DbErr> {
        let Some(train) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut train_am = train.into_active_model();
        train_am.name = ActiveValue::Set(params.name);
        train_am.cargo_num = ActiveValue::Set(params.cargo_num);
        train_am.places_in_cargo = ActiveValue::Set(params.places_in_cargo);
        train_am.train_type_id = ActiveValue::Set(params.train_type_id);

        Ok(Some(train_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Train::delete_by_id(id).exec(self.db).await
    }
}

/// `LIKE` pattern matching `needle` anywhere, lower-cased with wildcards escaped
fn contains_pattern(needle: &str) -> LikeExpr {
    let escaped = needle
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{}%", escaped)).escape('\\')
}
