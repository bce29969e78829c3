//! # Order Actor
//!
//! The order book. Its hooks receive the catalog [`ProductClient`](crate::clients::ProductClient)
//! as context, so stock checks run inside the actor:
//!
//! ```rust,ignore
//! let (order_actor, generic) = order_actor::new(32);
//! tokio::spawn(order_actor.run(product_client.clone()));
//! ```
//!
//! Status moves only through [`OrderAction::ChangeStatus`], which enforces the lifecycle
//! `pending → processing → completed`, with `cancelled` reachable from the first two.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
