//! Order actions: status changes and the order-summary item editor.
//!
//! Item edits leave `total_amount` as it was stored; only `RecalculateTotal` refreshes it.

use crate::model::{Order, OrderItem, OrderItemId, OrderItemInput, OrderStatus};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Move the order along the status lifecycle.
    ChangeStatus(OrderStatus),
    /// Add a line, merging into an existing line for the same product and size/color.
    AddItem(OrderItemInput),
    UpdateItemQuantity { item_id: OrderItemId, quantity: u32 },
    /// Fails when it is the order's only item.
    RemoveItem(OrderItemId),
    /// Set `total_amount` to the sum of the current items.
    RecalculateTotal,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The order after the change.
    ChangeStatus(Order),
    /// Id of the new or merged line.
    AddItem(OrderItemId),
    /// The previous quantity.
    UpdateItemQuantity(u32),
    RemoveItem(OrderItem),
    /// The new total.
    RecalculateTotal(f64),
}
