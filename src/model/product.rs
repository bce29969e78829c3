//! Catalog entities.

use crate::framework::GenerateId;
use crate::model::{ProductId, VariationId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One size/color combination of a product with its own stock count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariation {
    pub id: VariationId,
    pub size: String,
    pub color: String,
    pub stock: u32,
    /// Opaque image references (data URLs from the file picker).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl ProductVariation {
    pub fn new(size: impl Into<String>, color: impl Into<String>, stock: u32) -> Self {
        Self {
            id: VariationId::generate(),
            size: size.into(),
            color: color.into(),
            stock,
            images: Vec::new(),
        }
    }

    pub fn is(&self, size: &str, color: &str) -> bool {
        self.size == size && self.color == color
    }
}

/// A catalog product.
///
/// A stored product always has at least one variation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub variations: Vec<ProductVariation>,
}

impl Product {
    pub fn variation(&self, id: &VariationId) -> Option<&ProductVariation> {
        self.variations.iter().find(|v| &v.id == id)
    }

    /// The variation with this exact size and color.
    pub fn find_variation(&self, size: &str, color: &str) -> Option<&ProductVariation> {
        self.variations.iter().find(|v| v.is(size, color))
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.variations.iter().any(|v| v.size == size)
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.variations.iter().any(|v| v.color == color)
    }
}

/// Variation fields as submitted with a product form.
///
/// `id` is set when the form edits an existing variation and kept as-is; new rows get a
/// fresh id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationInput {
    #[serde(default)]
    pub id: Option<VariationId>,
    pub size: String,
    pub color: String,
    pub stock: u32,
    #[serde(default)]
    pub images: Vec<String>,
}

impl VariationInput {
    pub fn new(size: impl Into<String>, color: impl Into<String>, stock: u32) -> Self {
        Self {
            id: None,
            size: size.into(),
            color: color.into(),
            stock,
            images: Vec::new(),
        }
    }

    pub fn into_variation(self) -> ProductVariation {
        ProductVariation {
            id: self.id.unwrap_or_else(VariationId::generate),
            size: self.size,
            color: self.color,
            stock: self.stock,
            images: self.images,
        }
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub sku: Option<String>,
    pub image: Option<String>,
    pub variations: Vec<VariationInput>,
}

/// Partial product edit. `None` leaves a field untouched.
///
/// `variations`, when present, replaces the whole list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub sku: Option<String>,
    pub image: Option<String>,
    pub variations: Option<Vec<VariationInput>>,
}

/// Stock-keeping unit built from category, name and a timestamp: `CAT-NAM-123456`.
///
/// Each prefix is the first three alphanumeric characters, upper-cased and padded with `X`;
/// the suffix is the last six digits of the millisecond timestamp.
pub fn generate_sku(category: &str, name: &str, now: DateTime<Utc>) -> String {
    fn prefix(text: &str) -> String {
        let mut out: String = text
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(3)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        while out.len() < 3 {
            out.push('X');
        }
        out
    }

    let suffix = now.timestamp_millis().rem_euclid(1_000_000);
    format!("{}-{}-{:06}", prefix(category), prefix(name), suffix)
}
