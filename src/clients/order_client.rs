//! # Order Client
//!
//! The order repository API. Stock checks happen in the Order actor's hooks; this client
//! handles role checks and the simulated status-update round trip.
use crate::aggregates::OrderFilter;
use crate::auth::Session;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{
    Order, OrderCreate, OrderId, OrderItem, OrderItemId, OrderItemInput, OrderStatus, OrderUpdate,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    status_delay: Duration,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }

    fn not_found(id: &OrderId) -> Self::Error {
        OrderError::NotFound(id.to_string())
    }
}

fn unexpected(result: OrderActionResult) -> OrderError {
    OrderError::ActorCommunicationError(format!("unexpected action result: {:?}", result))
}

impl OrderClient {
    /// `status_delay` is waited before every status change is dispatched.
    pub fn new(inner: ResourceClient<Order>, status_delay: Duration) -> Self {
        Self {
            inner,
            status_delay,
        }
    }

    fn require_orders(session: &Session, operation: &'static str) -> Result<(), OrderError> {
        Ok(session.require(session.can_manage_orders(), operation)?)
    }

    async fn action(&self, id: OrderId, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, session, params), fields(customer = %params.customer_name))]
    pub async fn create_order(
        &self,
        session: &Session,
        params: OrderCreate,
    ) -> Result<OrderId, OrderError> {
        Self::require_orders(session, "create orders")?;
        info!(items = params.items.len(), "Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, session, update))]
    pub async fn update_order(
        &self,
        session: &Session,
        id: OrderId,
        update: OrderUpdate,
    ) -> Result<Order, OrderError> {
        Self::require_orders(session, "edit orders")?;
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, session))]
    pub async fn delete_order(&self, session: &Session, id: OrderId) -> Result<(), OrderError> {
        Self::require_orders(session, "delete orders")?;
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    /// Move an order to `requested`.
    ///
    /// Staff sessions are refused before anything is sent. Otherwise the client waits the
    /// configured delay, then the actor validates the transition; an invalid one comes back
    /// as [`OrderError::InvalidTransition`] with the order unchanged.
    #[instrument(skip(self, session), fields(role = %session.role))]
    pub async fn apply_transition(
        &self,
        session: &Session,
        id: OrderId,
        requested: OrderStatus,
    ) -> Result<Order, OrderError> {
        session.require(session.can_change_order_status(), "change order status")?;
        debug!(delay_ms = self.status_delay.as_millis() as u64, "Simulating status update");
        tokio::time::sleep(self.status_delay).await;
        match self.action(id, OrderAction::ChangeStatus(requested)).await? {
            OrderActionResult::ChangeStatus(order) => {
                info!(status = %order.status, "Order status changed");
                Ok(order)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Add a line to a stored order. The stored total is not refreshed.
    #[instrument(skip(self, session, input))]
    pub async fn add_item(
        &self,
        session: &Session,
        id: OrderId,
        input: OrderItemInput,
    ) -> Result<OrderItemId, OrderError> {
        Self::require_orders(session, "edit orders")?;
        match self.action(id, OrderAction::AddItem(input)).await? {
            OrderActionResult::AddItem(item_id) => Ok(item_id),
            other => Err(unexpected(other)),
        }
    }

    /// Returns the previous quantity. The stored total is not refreshed.
    #[instrument(skip(self, session))]
    pub async fn update_item_quantity(
        &self,
        session: &Session,
        id: OrderId,
        item_id: OrderItemId,
        quantity: u32,
    ) -> Result<u32, OrderError> {
        Self::require_orders(session, "edit orders")?;
        let action = OrderAction::UpdateItemQuantity { item_id, quantity };
        match self.action(id, action).await? {
            OrderActionResult::UpdateItemQuantity(previous) => Ok(previous),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, session))]
    pub async fn remove_item(
        &self,
        session: &Session,
        id: OrderId,
        item_id: OrderItemId,
    ) -> Result<OrderItem, OrderError> {
        Self::require_orders(session, "edit orders")?;
        match self.action(id, OrderAction::RemoveItem(item_id)).await? {
            OrderActionResult::RemoveItem(item) => Ok(item),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, session))]
    pub async fn recalculate_total(&self, session: &Session, id: OrderId) -> Result<f64, OrderError> {
        Self::require_orders(session, "edit orders")?;
        match self.action(id, OrderAction::RecalculateTotal).await? {
            OrderActionResult::RecalculateTotal(total) => Ok(total),
            other => Err(unexpected(other)),
        }
    }

    pub async fn filter_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders.into_iter().filter(|o| filter.matches(o)).collect())
    }

    /// Load a fixture order as stored, bypassing the creation stock check.
    #[instrument(skip(self, order), fields(id = %order.id))]
    pub async fn seed(&self, order: Order) -> Result<OrderId, OrderError> {
        self.inner.insert(order).await.map_err(|e| match e {
            FrameworkError::AlreadyExists(id) => {
                OrderError::Validation(format!("duplicate order id {}", id))
            }
            other => Self::map_error(other),
        })
    }
}
