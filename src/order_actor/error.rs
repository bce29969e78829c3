//! Error types for the Order actor.

use crate::auth::AccessError;
use crate::model::OrderStatus;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An item refers to a product or size/color the catalog does not have.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error("Insufficient stock for {product} ({size}/{color}): requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        size: String,
        color: String,
        requested: u32,
        available: u32,
    },

    /// The requested status is not reachable from the current one.
    #[error("Cannot change order status from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order item not found: {0}")]
    ItemNotFound(String),

    #[error("An order must keep at least one item")]
    LastItem,

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Forbidden(#[from] AccessError),

    /// The catalog failed while checking stock.
    #[error("Catalog error: {0}")]
    Catalog(#[from] ProductError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
