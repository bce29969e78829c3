//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Shared reads (`get`, `fetch`, `list`) come from the
//! [`ActorClient`](crate::framework::ActorClient) trait; bring it into scope to use them.

pub mod order_client;
pub mod product_client;

pub use order_client::*;
pub use product_client::*;
