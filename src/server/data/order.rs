use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an order owned by the provided user, timestamped now
    pub async fn create(&self, user_id: i32) -> Result<entity::booking_order::Model, DbErr> {
        let order = entity::booking_order::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        order.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking_order::Model>, DbErr> {
        entity::prelude::BookingOrder::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Returns the order only if it belongs to the provided user
    pub async fn get_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::booking_order::Model>, DbErr> {
        entity::prelude::BookingOrder::find_by_id(id)
            .filter(entity::booking_order::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns the orders of a user, newest first
    pub async fn get_all_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::booking_order::Model>, DbErr> {
        entity::prelude::BookingOrder::find()
            .filter(entity::booking_order::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking_order::Column::CreatedAt)
            .order_by_desc(entity::booking_order::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::booking_order::Model>, DbErr> {
        entity::prelude::BookingOrder::find()
            .filter(entity::booking_order::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Deletes an order along with its tickets
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BookingOrder::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
