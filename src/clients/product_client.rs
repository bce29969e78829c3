//! # Product Client
//!
//! The catalog repository API. Mutations take the caller's [`Session`] and are refused for
//! anyone but an admin; reads are open to every role.
use crate::aggregates::{categories, ProductFilter};
use crate::auth::Session;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{
    Product, ProductCreate, ProductId, ProductUpdate, ProductVariation, VariationId,
    VariationInput,
};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }

    fn not_found(id: &ProductId) -> Self::Error {
        ProductError::NotFound(id.to_string())
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {:?}", result))
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    fn require_admin(session: &Session, operation: &'static str) -> Result<(), ProductError> {
        Ok(session.require(session.can_manage_catalog(), operation)?)
    }

    async fn action(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<ProductActionResult, ProductError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, session, params), fields(name = %params.name))]
    pub async fn create_product(
        &self,
        session: &Session,
        params: ProductCreate,
    ) -> Result<ProductId, ProductError> {
        Self::require_admin(session, "add products")?;
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, session, update))]
    pub async fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        Self::require_admin(session, "edit products")?;
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Orders that reference the product keep their snapshot and a dangling product id.
    #[instrument(skip(self, session))]
    pub async fn delete_product(&self, session: &Session, id: ProductId) -> Result<(), ProductError> {
        Self::require_admin(session, "delete products")?;
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, session, input))]
    pub async fn add_variation(
        &self,
        session: &Session,
        id: ProductId,
        input: VariationInput,
    ) -> Result<VariationId, ProductError> {
        Self::require_admin(session, "edit variations")?;
        match self.action(id, ProductAction::AddVariation(input)).await? {
            ProductActionResult::AddVariation(variation_id) => Ok(variation_id),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, session, input))]
    pub async fn update_variation(
        &self,
        session: &Session,
        id: ProductId,
        variation_id: VariationId,
        input: VariationInput,
    ) -> Result<ProductVariation, ProductError> {
        Self::require_admin(session, "edit variations")?;
        let action = ProductAction::UpdateVariation {
            id: variation_id,
            input,
        };
        match self.action(id, action).await? {
            ProductActionResult::UpdateVariation(variation) => Ok(variation),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, session))]
    pub async fn remove_variation(
        &self,
        session: &Session,
        id: ProductId,
        variation_id: VariationId,
    ) -> Result<ProductVariation, ProductError> {
        Self::require_admin(session, "edit variations")?;
        match self
            .action(id, ProductAction::RemoveVariation(variation_id))
            .await?
        {
            ProductActionResult::RemoveVariation(variation) => Ok(variation),
            other => Err(unexpected(other)),
        }
    }

    /// Overwrite one variation's stock. Returns the previous count.
    #[instrument(skip(self, session))]
    pub async fn set_stock(
        &self,
        session: &Session,
        id: ProductId,
        variation_id: VariationId,
        stock: u32,
    ) -> Result<u32, ProductError> {
        Self::require_admin(session, "adjust stock")?;
        let action = ProductAction::SetStock {
            id: variation_id,
            stock,
        };
        match self.action(id, action).await? {
            ProductActionResult::SetStock(previous) => Ok(previous),
            other => Err(unexpected(other)),
        }
    }

    /// Current stock of the variation with this size and color.
    #[instrument(skip(self))]
    pub async fn check_stock(
        &self,
        id: ProductId,
        size: &str,
        color: &str,
    ) -> Result<u32, ProductError> {
        let action = ProductAction::CheckStock {
            size: size.to_string(),
            color: color.to_string(),
        };
        match self.action(id, action).await? {
            ProductActionResult::CheckStock(stock) => Ok(stock),
            other => Err(unexpected(other)),
        }
    }

    pub async fn filter_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        Ok(products.into_iter().filter(|p| filter.matches(p)).collect())
    }

    /// Distinct categories in catalog order.
    pub async fn categories(&self) -> Result<Vec<String>, ProductError> {
        Ok(categories(&self.list().await?))
    }

    /// Load a fixture product under its own id.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn seed(&self, product: Product) -> Result<ProductId, ProductError> {
        self.inner.insert(product).await.map_err(|e| match e {
            FrameworkError::AlreadyExists(id) => {
                ProductError::Validation(format!("duplicate product id {}", id))
            }
            other => Self::map_error(other),
        })
    }
}
