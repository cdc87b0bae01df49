use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Values needed to register a user
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user: NewUser) -> Result<entity::railbook_user::Model, DbErr> {
        let user = entity::railbook_user::ActiveModel {
            email: ActiveValue::Set(user.email),
            password_hash: ActiveValue::Set(user.password_hash),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            is_staff: ActiveValue::Set(user.is_staff),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::railbook_user::Model>, DbErr> {
        entity::prelude::RailbookUser::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::railbook_user::Model>, DbErr> {
        entity::prelude::RailbookUser::find()
            .filter(entity::railbook_user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::railbook_user::Model>, DbErr> {
        entity::prelude::RailbookUser::find()
            .filter(entity::railbook_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates profile fields, a `None` password hash keeps the current password
    pub async fn update_profile(
        &self,
        id: i32,
        first_name: String,
        last_name: String,
        password_hash: Option<String>,
    ) -> Result<Option<entity::railbook_user::Model>, DbErr> {
        let Some(user) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.first_name = ActiveValue::Set(first_name);
        user_am.last_name = ActiveValue::Set(last_name);
        if let Some(password_hash) = password_hash {
            user_am.password_hash = ActiveValue::Set(password_hash);
        }

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Grants or revokes staff permissions
    pub async fn set_staff(
        &self,
        id: i32,
        is_staff: bool,
    ) -> Result<Option<entity::railbook_user::Model>, DbErr> {
        let Some(user) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.is_staff = ActiveValue::Set(is_staff);

        Ok(Some(user_am.update(self.db).await?))
    }
}
