use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::UNUSABLE_PASSWORD_HASH, error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a user that can't log in with any password
    pub async fn insert_user(
        &self,
        email: &str,
        is_staff: bool,
    ) -> Result<entity::railbook_user::Model, TestError> {
        Ok(
            entity::prelude::RailbookUser::insert(entity::railbook_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(UNUSABLE_PASSWORD_HASH.to_string()),
                first_name: ActiveValue::Set(String::new()),
                last_name: ActiveValue::Set(String::new()),
                is_staff: ActiveValue::Set(is_staff),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a regular user with a generated email
    pub async fn insert_mock_user(&mut self) -> Result<entity::railbook_user::Model, TestError> {
        let n = self.setup.next_sequence();
        self.insert_user(&format!("user{}@example.com", n), false)
            .await
    }

    /// Inserts a staff user with a generated email
    pub async fn insert_mock_staff(&mut self) -> Result<entity::railbook_user::Model, TestError> {
        let n = self.setup.next_sequence();
        self.insert_user(&format!("staff{}@example.com", n), true)
            .await
    }
}
