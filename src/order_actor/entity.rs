//! [`ActorEntity`] implementation for [`Order`].
//!
//! The order actor's context is the catalog client. Creating an order or replacing its items
//! checks every line against the current stock of its product variation; growing one line
//! checks that line alone. Stock is only read, never decremented.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::aggregates::order_total;
use crate::clients::ProductClient;
use crate::framework::ActorEntity;
use crate::model::{
    validate_transition, Order, OrderCreate, OrderId, OrderItem, OrderItemInput, OrderStatus,
    OrderUpdate, ProductId, VariationRef,
};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

/// Requested quantity of one product variation across an order.
struct Demand<'a> {
    product_id: &'a ProductId,
    product_name: &'a str,
    variation: &'a VariationRef,
    quantity: u32,
}

fn demand<'a>(items: impl IntoIterator<Item = &'a OrderItem>) -> Vec<Demand<'a>> {
    let mut lines: Vec<Demand<'_>> = Vec::new();
    for item in items {
        match lines
            .iter_mut()
            .find(|d| d.product_id == &item.product_id && d.variation == &item.variation)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => lines.push(Demand {
                product_id: &item.product_id,
                product_name: &item.product_name,
                variation: &item.variation,
                quantity: item.quantity,
            }),
        }
    }
    lines
}

async fn ensure_stock(items: &[OrderItem], catalog: &ProductClient) -> Result<(), OrderError> {
    check_demand(demand(items), catalog).await
}

/// Stock check for one product variation, summed over every line that orders it. Other
/// lines are not consulted, so a line whose product was since deleted does not block edits
/// to its neighbours.
async fn ensure_line_stock(
    items: &[OrderItem],
    product_id: &ProductId,
    variation: &VariationRef,
    catalog: &ProductClient,
) -> Result<(), OrderError> {
    let lines = demand(items.iter().filter(|i| i.same_line(product_id, variation)));
    check_demand(lines, catalog).await
}

async fn check_demand(lines: Vec<Demand<'_>>, catalog: &ProductClient) -> Result<(), OrderError> {
    for line in lines {
        let VariationRef { size, color } = line.variation;
        let available = match catalog
            .check_stock(line.product_id.clone(), size, color)
            .await
        {
            Ok(available) => available,
            Err(ProductError::NotFound(id)) => return Err(OrderError::InvalidProduct(id)),
            Err(ProductError::VariationNotFound(_)) => {
                return Err(OrderError::InvalidProduct(format!(
                    "{} has no {}/{} variation",
                    line.product_id, size, color
                )))
            }
            Err(e) => return Err(OrderError::Catalog(e)),
        };
        debug!(
            product_id = %line.product_id,
            %size,
            %color,
            requested = line.quantity,
            available,
            "Stock check"
        );
        if line.quantity > available {
            return Err(OrderError::InsufficientStock {
                product: line.product_name.to_string(),
                size: size.clone(),
                color: color.clone(),
                requested: line.quantity,
                available,
            });
        }
    }
    Ok(())
}

fn build_items(inputs: Vec<OrderItemInput>) -> Result<Vec<OrderItem>, OrderError> {
    if inputs.is_empty() {
        return Err(OrderError::Validation(
            "an order needs at least one item".into(),
        ));
    }
    for input in &inputs {
        check_quantity(input.quantity)?;
        if !input.price.is_finite() || input.price < 0.0 {
            return Err(OrderError::Validation(format!(
                "invalid price {} for {}",
                input.price, input.product_name
            )));
        }
    }
    Ok(inputs.into_iter().map(OrderItemInput::into_item).collect())
}

fn check_quantity(quantity: u32) -> Result<(), OrderError> {
    if quantity == 0 {
        Err(OrderError::Validation("quantity must be at least 1".into()))
    } else {
        Ok(())
    }
}

impl Order {
    fn item_index(&self, id: &crate::model::OrderItemId) -> Result<usize, OrderError> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| OrderError::ItemNotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ProductClient;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// New orders start `pending` with `total_amount` computed from the submitted items.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        let items = build_items(params.items)?;
        let now = Utc::now();
        Ok(Self {
            id,
            customer_name: params.customer_name,
            customer_email: params.customer_email,
            customer_phone: params.customer_phone,
            shipping_address: params.shipping_address,
            payment_status: params.payment_status,
            payment_method: params.payment_method,
            status: OrderStatus::Pending,
            total_amount: order_total(&items),
            items,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_create(&mut self, catalog: &ProductClient) -> Result<(), OrderError> {
        ensure_stock(&self.items, catalog).await
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        catalog: &ProductClient,
    ) -> Result<(), OrderError> {
        if let Some(name) = update.customer_name {
            self.customer_name = name;
        }
        if let Some(email) = update.customer_email {
            self.customer_email = email;
        }
        if let Some(phone) = update.customer_phone {
            self.customer_phone = phone;
        }
        if let Some(address) = update.shipping_address {
            self.shipping_address = address;
        }
        if let Some(payment_status) = update.payment_status {
            self.payment_status = payment_status;
        }
        if let Some(payment_method) = update.payment_method {
            self.payment_method = payment_method;
        }
        if let Some(inputs) = update.items {
            let items = build_items(inputs)?;
            ensure_stock(&items, catalog).await?;
            self.total_amount = order_total(&items);
            self.items = items;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        catalog: &ProductClient,
    ) -> Result<OrderActionResult, OrderError> {
        let result = match action {
            OrderAction::ChangeStatus(requested) => {
                if !validate_transition(self.status, requested) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: requested,
                    });
                }
                self.status = requested;
                self.updated_at = Utc::now();
                return Ok(OrderActionResult::ChangeStatus(self.clone()));
            }
            OrderAction::AddItem(input) => {
                let mut items = build_items(vec![input])?;
                let new_item = items.remove(0);
                let product_id = new_item.product_id.clone();
                let variation = new_item.variation.clone();
                let id = match self
                    .items
                    .iter_mut()
                    .find(|i| i.same_line(&new_item.product_id, &new_item.variation))
                {
                    Some(existing) => {
                        existing.quantity = existing.quantity.saturating_add(new_item.quantity);
                        existing.id.clone()
                    }
                    None => {
                        let id = new_item.id.clone();
                        self.items.push(new_item);
                        id
                    }
                };
                ensure_line_stock(&self.items, &product_id, &variation, catalog).await?;
                OrderActionResult::AddItem(id)
            }
            OrderAction::UpdateItemQuantity { item_id, quantity } => {
                check_quantity(quantity)?;
                let idx = self.item_index(&item_id)?;
                let previous = std::mem::replace(&mut self.items[idx].quantity, quantity);
                if quantity > previous {
                    let item = &self.items[idx];
                    ensure_line_stock(&self.items, &item.product_id, &item.variation, catalog)
                        .await?;
                }
                OrderActionResult::UpdateItemQuantity(previous)
            }
            OrderAction::RemoveItem(item_id) => {
                let idx = self.item_index(&item_id)?;
                if self.items.len() == 1 {
                    return Err(OrderError::LastItem);
                }
                OrderActionResult::RemoveItem(self.items.remove(idx))
            }
            OrderAction::RecalculateTotal => {
                self.total_amount = self.computed_total();
                OrderActionResult::RecalculateTotal(self.total_amount)
            }
        };
        self.updated_at = Utc::now();
        Ok(result)
    }
}
