//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityName, EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_booking_tables: bool,

    // Users to insert, (email, is_staff)
    users: Vec<(String, bool)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_booking_tables: false,
            users: Vec::new(),
        }
    }

    /// Add every table of the booking schema to the test database.
    ///
    /// Creates the station, route, train type, train, crew, journey, journey crew, user,
    /// order and ticket tables along with the composite unique indexes the migrations define,
    /// so uniqueness behaves the same way it does against Postgres.
    pub fn with_booking_tables(mut self) -> Self {
        self.include_booking_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use railbook_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), railbook_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Station)
    ///     .with_table(Route)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user during `build()`, requires the booking tables
    pub fn with_user(mut self, email: impl Into<String>, is_staff: bool) -> Self {
        self.users.push((email.into(), is_staff));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_booking_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Station),
                schema.create_table_from_entity(entity::prelude::Route),
                schema.create_table_from_entity(entity::prelude::TrainType),
                schema.create_table_from_entity(entity::prelude::Train),
                schema.create_table_from_entity(entity::prelude::Crew),
                schema.create_table_from_entity(entity::prelude::Journey),
                schema.create_table_from_entity(entity::prelude::JourneyCrew),
                schema.create_table_from_entity(entity::prelude::RailbookUser),
                schema.create_table_from_entity(entity::prelude::BookingOrder),
                schema.create_table_from_entity(entity::prelude::Ticket),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_booking_tables {
            setup.with_indexes(booking_unique_indexes()).await?;
        }

        for (email, is_staff) in self.users {
            setup.user().insert_user(&email, is_staff).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Composite unique indexes matching those created by the migrations
fn booking_unique_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx-station-latitude-longitude")
            .table(entity::station::Entity.table_ref())
            .col(entity::station::Column::Latitude)
            .col(entity::station::Column::Longitude)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-route-source_id-destination_id")
            .table(entity::route::Entity.table_ref())
            .col(entity::route::Column::SourceId)
            .col(entity::route::Column::DestinationId)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-crew-first_name-last_name")
            .table(entity::crew::Entity.table_ref())
            .col(entity::crew::Column::FirstName)
            .col(entity::crew::Column::LastName)
            .unique()
            .to_owned(),
        Index::create()
            .name("journey_seat__unique")
            .table(entity::ticket::Entity.table_ref())
            .col(entity::ticket::Column::JourneyId)
            .col(entity::ticket::Column::Cargo)
            .col(entity::ticket::Column::Seat)
            .unique()
            .to_owned(),
    ]
}
