//! # ActorClient Trait
//!
//! Shared repository reads for the resource-specific clients: `get`, `list` and `fetch`
//! come for free once a client can expose its inner `ResourceClient` and map framework
//! errors into its own error type.
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Error used by [`ActorClient::fetch`] when nothing is stored under `id`.
    fn not_found(id: &T::Id) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an entity that must exist.
    async fn fetch(&self, id: T::Id) -> Result<T, Self::Error> {
        match self.get(id.clone()).await? {
            Some(entity) => Ok(entity),
            None => Err(Self::not_found(&id)),
        }
    }

    /// Every stored entity, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
