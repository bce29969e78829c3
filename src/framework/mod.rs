//! Generic resource-actor framework.
//!
//! Every store in the crate (the catalog and the order book) is a [`ResourceActor`] owning its
//! collection inside one Tokio task. Callers never touch the collection directly; they send
//! requests through a [`ResourceClient`], which makes the actor an in-process repository with
//! `create / insert / get / list / update / delete` plus entity-specific actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - what a stored resource must provide (ids, payloads, hooks)
//! - [`ResourceActor`] - the generic server loop
//! - [`ResourceClient`] - the typed, cloneable handle
//! - [`ActorClient`] - shared reads for the resource-specific clients
//! - [`FrameworkError`] - channel and lookup failures
//!
//! # Testing
//!
//! See [`mock`] for test doubles that stand in for an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, GenerateId};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
