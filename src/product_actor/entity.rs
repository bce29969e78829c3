//! [`ActorEntity`] implementation for [`Product`].
//!
//! The actor guarantees a stored product has a finite, non-negative price and at least one
//! variation. Size/color uniqueness is enforced only by the variation actions; a whole-product
//! update replaces the list as submitted.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, VariationInput};
use async_trait::async_trait;

fn check_price(price: f64) -> Result<f64, ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ProductError::Validation(format!("invalid price {}", price)))
    }
}

fn check_variations(variations: Vec<VariationInput>) -> Result<Vec<VariationInput>, ProductError> {
    if variations.is_empty() {
        Err(ProductError::Validation(
            "at least one variation is required".into(),
        ))
    } else {
        Ok(variations)
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let price = check_price(params.price)?;
        let variations = check_variations(params.variations)?;
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            price,
            sku: params.sku,
            image: params.image,
            variations: variations
                .into_iter()
                .map(VariationInput::into_variation)
                .collect(),
        })
    }

    /// Shallow merge: only the fields present in the update are touched.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(sku) = update.sku {
            self.sku = Some(sku);
        }
        if let Some(image) = update.image {
            self.image = Some(image);
        }
        if let Some(variations) = update.variations {
            self.variations = check_variations(variations)?
                .into_iter()
                .map(VariationInput::into_variation)
                .collect();
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::AddVariation(input) => {
                if self.find_variation(&input.size, &input.color).is_some() {
                    return Err(ProductError::DuplicateVariation {
                        size: input.size,
                        color: input.color,
                    });
                }
                let variation = input.into_variation();
                let id = variation.id.clone();
                self.variations.push(variation);
                Ok(ProductActionResult::AddVariation(id))
            }
            ProductAction::UpdateVariation { id, input } => {
                let collides = self
                    .variations
                    .iter()
                    .any(|v| v.id != id && v.is(&input.size, &input.color));
                if collides {
                    return Err(ProductError::DuplicateVariation {
                        size: input.size,
                        color: input.color,
                    });
                }
                let variation = self
                    .variations
                    .iter_mut()
                    .find(|v| v.id == id)
                    .ok_or_else(|| ProductError::VariationNotFound(id.to_string()))?;
                variation.size = input.size;
                variation.color = input.color;
                variation.stock = input.stock;
                variation.images = input.images;
                Ok(ProductActionResult::UpdateVariation(variation.clone()))
            }
            ProductAction::RemoveVariation(id) => {
                let idx = self
                    .variations
                    .iter()
                    .position(|v| v.id == id)
                    .ok_or_else(|| ProductError::VariationNotFound(id.to_string()))?;
                if self.variations.len() == 1 {
                    return Err(ProductError::LastVariation);
                }
                Ok(ProductActionResult::RemoveVariation(
                    self.variations.remove(idx),
                ))
            }
            ProductAction::SetStock { id, stock } => {
                let variation = self
                    .variations
                    .iter_mut()
                    .find(|v| v.id == id)
                    .ok_or_else(|| ProductError::VariationNotFound(id.to_string()))?;
                let previous = std::mem::replace(&mut variation.stock, stock);
                Ok(ProductActionResult::SetStock(previous))
            }
            ProductAction::CheckStock { size, color } => self
                .find_variation(&size, &color)
                .map(|v| ProductActionResult::CheckStock(v.stock))
                .ok_or_else(|| ProductError::VariationNotFound(format!("{}/{}", size, color))),
        }
    }
}
