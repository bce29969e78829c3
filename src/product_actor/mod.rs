//! # Product Actor
//!
//! The catalog store. Besides CRUD it exposes the variation editor as actions:
//!
//! ```rust,ignore
//! let id = catalog.add_variation(&session, product_id, VariationInput::new("XL", "Black", 4)).await?;
//! let stock = catalog.check_stock(product_id, "XL", "Black").await?;
//! ```
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for
//!   [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and its generic client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Product;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
