use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        order::{OrderDto, OrderListDto, OrderPayload, OrderTicketPayload},
        ticket::{TicketDto, TicketListDto},
    },
    server::{
        data::{
            order::OrderRepository,
            ticket::{TicketParams, TicketRepository},
        },
        error::{validation::ValidationError, Error},
        service::booking::{
            ticket::{ticket_dto, ticket_list_dtos},
            validate::validate_ticket,
        },
    },
};

/// Order operations scoped to the owning user
///
/// Creating or updating an order writes all of its tickets in one transaction, if any ticket
/// is rejected nothing is written.
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new instance of [`OrderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's orders, newest first
    pub async fn list(&self, user_id: i32) -> Result<Vec<OrderListDto>, Error> {
        let orders = OrderRepository::new(self.db).get_all_by_user(user_id).await?;

        self.order_list_dtos(orders).await
    }

    pub async fn get(&self, user_id: i32, id: i32) -> Result<OrderListDto, Error> {
        let order = OrderRepository::new(self.db)
            .get_by_id_for_user(id, user_id)
            .await?
            .ok_or(Error::NotFound("Order"))?;

        self.order_list_dtos(vec![order])
            .await?
            .pop()
            .ok_or(Error::NotFound("Order"))
    }

    /// Creates an order with its tickets
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - Order and every ticket were written
    /// - `Err(Error::ValidationError)` - No tickets provided or a ticket was rejected, including
    ///   two tickets of the same request claiming the same seat
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, user_id: i32, payload: OrderPayload) -> Result<OrderDto, Error> {
        check_not_empty(&payload)?;

        let txn = self.db.begin().await?;

        let result = async {
            let order = OrderRepository::new(&txn).create(user_id).await?;
            let tickets = insert_tickets(&txn, order.id, payload.tickets).await?;

            Ok::<_, Error>(OrderDto {
                id: order.id,
                tickets,
                created_at: order.created_at,
            })
        }
        .await;

        match result {
            Ok(order) => {
                txn.commit().await?;

                tracing::info!(
                    order_id = %order.id,
                    user_id = %user_id,
                    "Created order with {} tickets",
                    order.tickets.len()
                );

                Ok(order)
            }
            Err(e) => {
                txn.rollback().await?;

                Err(e)
            }
        }
    }

    /// Replaces the tickets of an order with the submitted set
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        payload: OrderPayload,
    ) -> Result<OrderDto, Error> {
        let order = OrderRepository::new(self.db)
            .get_by_id_for_user(id, user_id)
            .await?
            .ok_or(Error::NotFound("Order"))?;

        check_not_empty(&payload)?;

        let txn = self.db.begin().await?;

        let result = async {
            TicketRepository::new(&txn).delete_by_order(order.id).await?;
            insert_tickets(&txn, order.id, payload.tickets).await
        }
        .await;

        match result {
            Ok(tickets) => {
                txn.commit().await?;

                tracing::info!(order_id = %order.id, "Replaced tickets of order");

                Ok(OrderDto {
                    id: order.id,
                    tickets,
                    created_at: order.created_at,
                })
            }
            Err(e) => {
                txn.rollback().await?;

                Err(e)
            }
        }
    }

    /// Deletes an order along with its tickets
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), Error> {
        let order_repo = OrderRepository::new(self.db);
        if order_repo.get_by_id_for_user(id, user_id).await?.is_none() {
            return Err(Error::NotFound("Order"));
        }

        order_repo.delete(id).await?;

        tracing::info!(order_id = %id, "Deleted order");

        Ok(())
    }

    async fn order_list_dtos(
        &self,
        orders: Vec<entity::booking_order::Model>,
    ) -> Result<Vec<OrderListDto>, Error> {
        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let tickets = TicketRepository::new(self.db)
            .get_by_order_ids(&order_ids)
            .await?;
        let ticket_orders: Vec<i32> = tickets.iter().map(|t| t.order_id).collect();
        let ticket_dtos = ticket_list_dtos(self.db, tickets).await?;

        let mut tickets_by_order: HashMap<i32, Vec<TicketListDto>> = HashMap::new();
        for (order_id, ticket) in ticket_orders.into_iter().zip(ticket_dtos) {
            tickets_by_order.entry(order_id).or_default().push(ticket);
        }

        Ok(orders
            .into_iter()
            .map(|order| OrderListDto {
                id: order.id,
                tickets: tickets_by_order.remove(&order.id).unwrap_or_default(),
                created_at: order.created_at,
            })
            .collect())
    }
}

fn check_not_empty(payload: &OrderPayload) -> Result<(), ValidationError> {
    if payload.tickets.is_empty() {
        return Err(ValidationError::invalid(
            "tickets",
            "This list may not be empty.",
        ));
    }

    Ok(())
}

/// Validates & inserts tickets one at a time so each sees the ones written before it
async fn insert_tickets<C: ConnectionTrait>(
    db: &C,
    order_id: i32,
    tickets: Vec<OrderTicketPayload>,
) -> Result<Vec<TicketDto>, Error> {
    let ticket_repo = TicketRepository::new(db);

    let mut created = Vec::with_capacity(tickets.len());
    for ticket in tickets {
        validate_ticket(db, ticket.journey, ticket.cargo, ticket.seat, None).await?;

        let ticket = ticket_repo
            .create(TicketParams {
                journey_id: ticket.journey,
                order_id,
                cargo: ticket.cargo,
                seat: ticket.seat,
            })
            .await?;
        created.push(ticket_dto(ticket));
    }

    Ok(created)
}
