//! # Inventory Admin
//!
//! The domain core of an inventory and order administration panel: a product catalog with
//! size/color variations and stock counts, and customer orders that snapshot catalog items
//! and move through a one-way status lifecycle.
//!
//! All state lives in memory. Each store is a resource actor running in its own Tokio task;
//! nothing else touches its collection, so no locks guard entity state.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) and the
//! [`ActorEntity`](framework::ActorEntity) contract. Every store is one of these.
//!
//! ### 2. The Data ([`model`])
//! Products, variations, orders, order items, typed ids and the
//! [`OrderStatus`](model::OrderStatus) state machine.
//!
//! ### 3. The Actors ([`product_actor`], [`order_actor`])
//! `ActorEntity` implementations holding the business rules: variation uniqueness, the last
//! variation/item guards, stock checks and status transitions.
//!
//! ### 4. The Interface ([`clients`], [`auth`])
//! [`ProductClient`](clients::ProductClient) and [`OrderClient`](clients::OrderClient) wrap
//! the generic client, check the caller's [`Session`](auth::Session) role and map framework
//! errors back to typed domain errors.
//!
//! ### 5. Derivations and Forms ([`aggregates`], [`forms`])
//! Pure functions for totals, stock summaries, the size × color matrix, filters and
//! dashboard statistics, plus typed form drafts validated into create/update payloads.
//!
//! ### 6. The Orchestrator ([`lifecycle`], [`config`], [`fixtures`])
//! [`AdminSystem`](lifecycle::AdminSystem) starts and wires the actors, seeds the bundled
//! fixtures and shuts everything down.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod aggregates;
pub mod auth;
pub mod clients;
pub mod config;
pub mod fixtures;
pub mod forms;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
