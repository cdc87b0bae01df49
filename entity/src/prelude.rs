pub use super::booking_order::Entity as BookingOrder;
pub use super::crew::Entity as Crew;
pub use super::journey::Entity as Journey;
pub use super::journey_crew::Entity as JourneyCrew;
pub use super::railbook_user::Entity as RailbookUser;
pub use super::route::Entity as Route;
pub use super::station::Entity as Station;
pub use super::ticket::Entity as Ticket;
pub use super::train::Entity as Train;
pub use super::train_type::Entity as TrainType;
