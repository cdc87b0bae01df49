use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn fleet<'a>(&'a mut self) -> FleetFixtures<'a> {
        FleetFixtures { setup: self }
    }
}

pub struct FleetFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> FleetFixtures<'a> {
    pub async fn insert_train_type(
        &self,
        name: &str,
    ) -> Result<entity::train_type::Model, TestError> {
        Ok(
            entity::prelude::TrainType::insert(entity::train_type::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_train(
        &self,
        name: &str,
        cargo_num: i32,
        places_in_cargo: i32,
        train_type_id: i32,
    ) -> Result<entity::train::Model, TestError> {
        Ok(
            entity::prelude::Train::insert(entity::train::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                cargo_num: ActiveValue::Set(cargo_num),
                places_in_cargo: ActiveValue::Set(places_in_cargo),
                train_type_id: ActiveValue::Set(train_type_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a train with its own train type, both with generated names
    pub async fn insert_mock_train(
        &mut self,
        cargo_num: i32,
        places_in_cargo: i32,
    ) -> Result<(entity::train::Model, entity::train_type::Model), TestError> {
        let n = self.setup.next_sequence();
        let train_type = self.insert_train_type(&format!("Type {}", n)).await?;
        let train = self
            .insert_train(
                &format!("Train {}", n),
                cargo_num,
                places_in_cargo,
                train_type.id,
            )
            .await?;

        Ok((train, train_type))
    }

    pub async fn insert_crew(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<entity::crew::Model, TestError> {
        Ok(
            entity::prelude::Crew::insert(entity::crew::ActiveModel {
                first_name: ActiveValue::Set(first_name.to_string()),
                last_name: ActiveValue::Set(last_name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a crew member with a generated name
    pub async fn insert_mock_crew(&mut self) -> Result<entity::crew::Model, TestError> {
        let n = self.setup.next_sequence();
        self.insert_crew("Crew", &format!("Member {}", n)).await
    }
}
