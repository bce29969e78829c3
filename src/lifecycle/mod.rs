//! # Lifecycle
//!
//! Starting, seeding and stopping the actors.
//!
//! ## Dependency graph
//!
//! ```text
//! Product actor (Context = ())
//!        ^
//!        | ProductClient (stock checks)
//! Order actor (Context = ProductClient)
//! ```
//!
//! The graph is acyclic, so shutdown needs no explicit message: dropping the clients closes
//! the order channel, the order actor exits and drops its catalog client, and the product
//! actor follows.

pub mod admin_system;
pub mod tracing;

pub use admin_system::{AdminSystem, LifecycleError};
pub use self::tracing::setup_tracing;
