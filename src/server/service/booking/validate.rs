use sea_orm::ConnectionTrait;

use crate::server::{
    data::{journey::JourneyRepository, ticket::TicketRepository, train::TrainRepository},
    error::{validation::ValidationError, Error},
};

/// Checks that `seat` and `cargo` exist on the train
///
/// Seats are numbered `1..=places_in_cargo` within each cargo, cargos `1..=cargo_num`.
pub fn check_seat_bounds(
    train: &entity::train::Model,
    cargo: i32,
    seat: i32,
) -> Result<(), ValidationError> {
    if !(1..=train.places_in_cargo).contains(&seat) {
        return Err(ValidationError::out_of_range(
            "seat",
            format!("seat must be in range [1, {}]", train.places_in_cargo),
        ));
    }
    if !(1..=train.cargo_num).contains(&cargo) {
        return Err(ValidationError::out_of_range(
            "cargo",
            format!("cargo must be in range [1, {}]", train.cargo_num),
        ));
    }

    Ok(())
}

/// Validates a ticket for `journey_id` before it is written
///
/// Run this on the same connection or transaction that writes the ticket so tickets written
/// earlier in the transaction count as taken. `ticket_id` is the ticket being replaced on
/// update, its current seat is not treated as a conflict.
///
/// # Returns
/// - `Ok(())` - Seat exists on the train and is free
/// - `Err(Error::ValidationError(Invalid))` - Journey does not exist
/// - `Err(Error::ValidationError(OutOfRange))` - Seat or cargo outside the train's dimensions
/// - `Err(Error::ValidationError(Conflict))` - Seat already booked
/// - `Err(Error::DbErr)` - Database query failed
pub async fn validate_ticket<C: ConnectionTrait>(
    db: &C,
    journey_id: i32,
    cargo: i32,
    seat: i32,
    ticket_id: Option<i32>,
) -> Result<(), Error> {
    let Some(journey) = JourneyRepository::new(db).get_by_id(journey_id).await? else {
        return Err(ValidationError::does_not_exist("journey", journey_id).into());
    };

    let Some(train) = TrainRepository::new(db).get_by_id(journey.train_id).await? else {
        return Err(Error::InternalError(format!(
            "Train ID {} of journey ID {} is missing despite foreign key constraints",
            journey.train_id, journey.id
        )));
    };

    check_seat_bounds(&train, cargo, seat)?;

    if let Some(taken) = TicketRepository::new(db)
        .find_by_seat(journey_id, cargo, seat)
        .await?
    {
        if Some(taken.id) != ticket_id {
            return Err(ValidationError::conflict(
                "non_field_errors",
                "The fields journey, cargo, seat must make a unique set.",
            )
            .into());
        }
    }

    Ok(())
}
