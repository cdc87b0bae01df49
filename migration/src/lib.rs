pub use sea_orm_migration::prelude::*;

mod m20251017_000001_station;
mod m20251017_000002_route;
mod m20251017_000003_train_type;
mod m20251017_000004_train;
mod m20251017_000005_crew;
mod m20251017_000006_journey;
mod m20251017_000007_journey_crew;
mod m20251017_000008_railbook_user;
mod m20251017_000009_booking_order;
mod m20251017_000010_ticket;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_station::Migration),
            Box::new(m20251017_000002_route::Migration),
            Box::new(m20251017_000003_train_type::Migration),
            Box::new(m20251017_000004_train::Migration),
            Box::new(m20251017_000005_crew::Migration),
            Box::new(m20251017_000006_journey::Migration),
            Box::new(m20251017_000007_journey_crew::Migration),
            Box::new(m20251017_000008_railbook_user::Migration),
            Box::new(m20251017_000009_booking_order::Migration),
            Box::new(m20251017_000010_ticket::Migration),
        ]
    }
}
