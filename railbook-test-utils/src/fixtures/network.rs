use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn network<'a>(&'a mut self) -> NetworkFixtures<'a> {
        NetworkFixtures { setup: self }
    }
}

pub struct NetworkFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> NetworkFixtures<'a> {
    pub async fn insert_station(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<entity::station::Model, TestError> {
        Ok(
            entity::prelude::Station::insert(entity::station::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                latitude: ActiveValue::Set(latitude),
                longitude: ActiveValue::Set(longitude),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_route(
        &self,
        source_id: i32,
        destination_id: i32,
        distance: i32,
    ) -> Result<entity::route::Model, TestError> {
        Ok(
            entity::prelude::Route::insert(entity::route::ActiveModel {
                source_id: ActiveValue::Set(source_id),
                destination_id: ActiveValue::Set(destination_id),
                distance: ActiveValue::Set(distance),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a station with a generated name and coordinates
    pub async fn insert_mock_station(&mut self) -> Result<entity::station::Model, TestError> {
        let n = self.setup.next_sequence();
        self.insert_station(&format!("Station {}", n), f64::from(n), f64::from(n))
            .await
    }

    /// Inserts a route between two freshly created stations
    ///
    /// # Returns
    /// - `(route, source, destination)`
    pub async fn insert_mock_route(
        &mut self,
    ) -> Result<
        (
            entity::route::Model,
            entity::station::Model,
            entity::station::Model,
        ),
        TestError,
    > {
        let source = self.insert_mock_station().await?;
        let destination = self.insert_mock_station().await?;
        let route = self.insert_route(source.id, destination.id, 100).await?;

        Ok((route, source, destination))
    }
}
