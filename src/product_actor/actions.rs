//! Variation editor actions for the Product actor.
//!
//! These operate on a single variation of a stored product. Unlike a whole-product update,
//! they keep `(size, color)` unique within the product and never leave it without variations.

use crate::model::{ProductVariation, VariationId, VariationInput};

#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Append a variation. Fails if the size/color pair already exists.
    AddVariation(VariationInput),
    /// Replace the fields of one variation, keeping its id.
    UpdateVariation {
        id: VariationId,
        input: VariationInput,
    },
    /// Fails when it is the product's only variation.
    RemoveVariation(VariationId),
    /// Overwrite the stock count of one variation. Last writer wins.
    SetStock { id: VariationId, stock: u32 },
    /// Read the stock of the variation with this size and color.
    CheckStock { size: String, color: String },
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    AddVariation(VariationId),
    UpdateVariation(ProductVariation),
    /// The removed variation.
    RemoveVariation(ProductVariation),
    /// The previous stock count.
    SetStock(u32),
    CheckStock(u32),
}
