//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored resource (products, orders) implements
//! to be managed by the generic [`ResourceActor`](crate::framework::ResourceActor). It names the
//! identifier, the create/update payloads, the resource-specific actions, the injected context
//! and the error type, and provides the lifecycle hooks the actor calls.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifiers the actor can mint for newly created entities.
///
/// Every entity in the system uses the same scheme (random UUIDs), so two creates can never
/// race onto the same id.
pub trait GenerateId {
    fn generate() -> Self;
}

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so an entity can consult other actors (the order store checks catalog
/// stock this way). The `Context` is handed to `run()`, not `new()`, so actors can be created
/// first and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier, minted by the actor on create.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + GenerateId;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Partial update merged into an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ChangeStatus`, `AddVariation`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per resource, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id this entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly minted id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merge an update into the entity.
    ///
    /// The actor runs this on a copy and only commits it when the hook succeeds.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a resource-specific action. Same copy-then-commit rule as `on_update`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
