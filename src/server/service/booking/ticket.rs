use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        ticket::{TicketDetailDto, TicketDto, TicketListDto, TicketPayload},
        user::UserDto,
    },
    server::{
        data::{
            journey::JourneyRepository,
            order::OrderRepository,
            ticket::{TicketParams, TicketRepository},
            user::UserRepository,
        },
        error::{validation::ValidationError, Error},
        service::{
            booking::{order_label, validate::validate_ticket},
            journey::{journey_label, journey_list_dtos},
        },
    },
};

/// Ticket operations on behalf of a user
///
/// Regular users only see tickets of their own orders, staff see every ticket. Tickets can
/// only be attached to orders owned by the calling user.
pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    /// Creates a new instance of [`TicketService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user: &UserDto) -> Result<Vec<TicketListDto>, Error> {
        let ticket_repo = TicketRepository::new(self.db);
        let tickets = if user.is_staff {
            ticket_repo.get_all().await?
        } else {
            ticket_repo.get_all_by_user(user.id).await?
        };

        ticket_list_dtos(self.db, tickets).await
    }

    /// Retrieves a ticket with its journey embedded
    pub async fn get(&self, user: &UserDto, id: i32) -> Result<TicketDetailDto, Error> {
        let ticket = self.get_visible(user, id).await?;

        let journeys = JourneyRepository::new(self.db)
            .get_by_ids(&[ticket.journey_id])
            .await?;
        let Some(journey) = journey_list_dtos(self.db, journeys).await?.pop() else {
            return Err(Error::InternalError(format!(
                "Journey ID {} of ticket ID {} is missing despite foreign key constraints",
                ticket.journey_id, ticket.id
            )));
        };

        let order = order_labels(self.db, &[ticket.order_id])
            .await?
            .remove(&ticket.order_id)
            .unwrap_or_default();

        Ok(TicketDetailDto {
            id: ticket.id,
            cargo: ticket.cargo,
            seat: ticket.seat,
            journey,
            order,
        })
    }

    pub async fn create(&self, user: &UserDto, payload: TicketPayload) -> Result<TicketDto, Error> {
        self.check_order_owner(user, payload.order).await?;
        validate_ticket(self.db, payload.journey, payload.cargo, payload.seat, None).await?;

        let ticket = TicketRepository::new(self.db)
            .create(ticket_params(payload))
            .await?;

        tracing::info!(
            ticket_id = %ticket.id,
            journey_id = %ticket.journey_id,
            "Booked cargo {} seat {}",
            ticket.cargo,
            ticket.seat
        );

        Ok(ticket_dto(ticket))
    }

    pub async fn update(
        &self,
        user: &UserDto,
        id: i32,
        payload: TicketPayload,
    ) -> Result<TicketDto, Error> {
        self.get_visible(user, id).await?;
        self.check_order_owner(user, payload.order).await?;
        validate_ticket(self.db, payload.journey, payload.cargo, payload.seat, Some(id)).await?;

        let ticket = TicketRepository::new(self.db)
            .update(id, ticket_params(payload))
            .await?
            .ok_or(Error::NotFound("Ticket"))?;

        Ok(ticket_dto(ticket))
    }

    pub async fn delete(&self, user: &UserDto, id: i32) -> Result<(), Error> {
        self.get_visible(user, id).await?;

        TicketRepository::new(self.db).delete(id).await?;

        tracing::info!(ticket_id = %id, "Deleted ticket");

        Ok(())
    }

    async fn get_visible(&self, user: &UserDto, id: i32) -> Result<entity::ticket::Model, Error> {
        let ticket_repo = TicketRepository::new(self.db);
        let ticket = if user.is_staff {
            ticket_repo.get_by_id(id).await?
        } else {
            ticket_repo.get_by_id_for_user(id, user.id).await?
        };

        ticket.ok_or(Error::NotFound("Ticket"))
    }

    async fn check_order_owner(&self, user: &UserDto, order_id: i32) -> Result<(), Error> {
        if OrderRepository::new(self.db)
            .get_by_id_for_user(order_id, user.id)
            .await?
            .is_none()
        {
            return Err(ValidationError::does_not_exist("order", order_id).into());
        }

        Ok(())
    }
}

fn ticket_params(payload: TicketPayload) -> TicketParams {
    TicketParams {
        journey_id: payload.journey,
        order_id: payload.order,
        cargo: payload.cargo,
        seat: payload.seat,
    }
}

pub(crate) fn ticket_dto(ticket: entity::ticket::Model) -> TicketDto {
    TicketDto {
        id: ticket.id,
        cargo: ticket.cargo,
        seat: ticket.seat,
        journey: ticket.journey_id,
        order: ticket.order_id,
    }
}

/// Maps tickets to list entries with journey & order rendered as text
pub(crate) async fn ticket_list_dtos(
    db: &DatabaseConnection,
    tickets: Vec<entity::ticket::Model>,
) -> Result<Vec<TicketListDto>, Error> {
    let mut journey_ids: Vec<i32> = tickets.iter().map(|t| t.journey_id).collect();
    journey_ids.sort_unstable();
    journey_ids.dedup();
    let mut order_ids: Vec<i32> = tickets.iter().map(|t| t.order_id).collect();
    order_ids.sort_unstable();
    order_ids.dedup();

    let journeys = JourneyRepository::new(db).get_by_ids(&journey_ids).await?;
    let journey_labels: HashMap<i32, String> = journey_list_dtos(db, journeys)
        .await?
        .iter()
        .map(|j| (j.id, journey_label(j)))
        .collect();
    let order_labels = order_labels(db, &order_ids).await?;

    Ok(tickets
        .into_iter()
        .map(|ticket| TicketListDto {
            id: ticket.id,
            cargo: ticket.cargo,
            seat: ticket.seat,
            journey: journey_labels
                .get(&ticket.journey_id)
                .cloned()
                .unwrap_or_default(),
            order: order_labels
                .get(&ticket.order_id)
                .cloned()
                .unwrap_or_default(),
        })
        .collect())
}

async fn order_labels(
    db: &DatabaseConnection,
    order_ids: &[i32],
) -> Result<HashMap<i32, String>, Error> {
    let orders = OrderRepository::new(db).get_by_ids(order_ids).await?;

    let user_ids: Vec<i32> = orders.iter().map(|o| o.user_id).collect();
    let emails: HashMap<i32, String> = UserRepository::new(db)
        .get_by_ids(&user_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u.email))
        .collect();

    Ok(orders
        .into_iter()
        .map(|order| {
            let email = emails.get(&order.user_id).map(String::as_str).unwrap_or("");
            (order.id, order_label(email, order.created_at))
        })
        .collect())
}
