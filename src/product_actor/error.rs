//! Error types for the Product actor.

use crate::auth::AccessError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product data breaks an entity invariant (negative price, no variations).
    #[error("Product validation error: {0}")]
    Validation(String),

    #[error("Variation {size}/{color} already exists")]
    DuplicateVariation { size: String, color: String },

    #[error("Variation not found: {0}")]
    VariationNotFound(String),

    #[error("A product must keep at least one variation")]
    LastVariation,

    #[error(transparent)]
    Forbidden(#[from] AccessError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
