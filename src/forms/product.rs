//! Product form.

use crate::forms::ValidationErrors;
use crate::model::{generate_sku, ProductCreate, ProductUpdate, VariationId, VariationInput};
use chrono::{DateTime, Utc};

/// One row of the variation table in the product form.
///
/// `stock` is signed because that is what the number input can hold; validation rejects
/// negatives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariationDraft {
    pub id: Option<VariationId>,
    pub size: String,
    pub color: String,
    pub stock: i64,
    pub images: Vec<String>,
}

impl VariationDraft {
    pub fn new(size: impl Into<String>, color: impl Into<String>, stock: i64) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
            stock,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Left blank to have one generated on create.
    pub sku: String,
    pub image: Option<String>,
    pub variations: Vec<VariationDraft>,
}

struct Checked {
    name: String,
    category: String,
    sku: Option<String>,
    variations: Vec<VariationInput>,
}

impl ProductDraft {
    fn check(&self) -> Result<Checked, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "Product name is required");
        }
        let category = self.category.trim();
        if category.is_empty() {
            errors.push("category", "Category is required");
        }
        if !self.price.is_finite() || self.price < 0.0 {
            errors.push("price", "Price must be zero or more");
        }
        if self.variations.is_empty() {
            errors.push("variations", "At least one variation is required");
        }

        let mut variations = Vec::with_capacity(self.variations.len());
        for (i, row) in self.variations.iter().enumerate() {
            let size = row.size.trim();
            let color = row.color.trim();
            if size.is_empty() {
                errors.push(format!("variations[{}].size", i), "Size is required");
            }
            if color.is_empty() {
                errors.push(format!("variations[{}].color", i), "Color is required");
            }
            match u32::try_from(row.stock) {
                Ok(stock) => variations.push(VariationInput {
                    id: row.id.clone(),
                    size: size.to_string(),
                    color: color.to_string(),
                    stock,
                    images: row.images.clone(),
                }),
                Err(_) => errors.push(
                    format!("variations[{}].stock", i),
                    "Stock must be a whole number of zero or more",
                ),
            }
        }

        let sku = Some(self.sku.trim())
            .filter(|s| !s.is_empty())
            .map(String::from);

        errors.into_result(Checked {
            name: name.to_string(),
            category: category.to_string(),
            sku,
            variations,
        })
    }

    /// Validate for "Add product". A blank SKU is generated from category, name and `now`.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<ProductCreate, ValidationErrors> {
        let checked = self.check()?;
        let sku = checked
            .sku
            .unwrap_or_else(|| generate_sku(&checked.category, &checked.name, now));
        Ok(ProductCreate {
            name: checked.name,
            category: checked.category,
            price: self.price,
            sku: Some(sku),
            image: self.image.clone(),
            variations: checked.variations,
        })
    }

    /// Validate for "Edit product". Every form field is sent; a blank SKU leaves the stored
    /// one in place.
    pub fn validate_update(&self) -> Result<ProductUpdate, ValidationErrors> {
        let checked = self.check()?;
        Ok(ProductUpdate {
            name: Some(checked.name),
            category: Some(checked.category),
            price: Some(self.price),
            sku: checked.sku,
            image: self.image.clone(),
            variations: Some(checked.variations),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Classic Tee".into(),
            category: "T-Shirts".into(),
            price: 499.0,
            sku: String::new(),
            image: None,
            variations: vec![VariationDraft::new("M", "Black", 15)],
        }
    }

    #[test]
    fn test_valid_draft_gets_generated_sku() {
        let now = Utc.timestamp_millis_opt(1_700_000_654_321).unwrap();
        let create = draft().validate(now).unwrap();
        assert_eq!(create.sku.as_deref(), Some("TSH-CLA-654321"));
        assert_eq!(create.variations[0].stock, 15);
    }

    #[test]
    fn test_explicit_sku_is_kept() {
        let mut d = draft();
        d.sku = " TEE-001 ".into();
        let create = d.validate(Utc::now()).unwrap();
        assert_eq!(create.sku.as_deref(), Some("TEE-001"));
    }

    #[test]
    fn test_collects_every_field_error() {
        let d = ProductDraft {
            name: "  ".into(),
            price: -1.0,
            variations: vec![VariationDraft::new("", "Black", -3)],
            ..Default::default()
        };
        let errors = d.validate(Utc::now()).unwrap_err();
        assert!(errors.field("name").is_some());
        assert!(errors.field("category").is_some());
        assert!(errors.field("price").is_some());
        assert!(errors.field("variations[0].size").is_some());
        assert!(errors.field("variations[0].stock").is_some());
        assert_eq!(errors.errors().len(), 5);
    }

    #[test]
    fn test_requires_a_variation() {
        let mut d = draft();
        d.variations.clear();
        let errors = d.validate_update().unwrap_err();
        assert_eq!(
            errors.field("variations"),
            Some("At least one variation is required")
        );
    }

    #[test]
    fn test_update_leaves_blank_sku_untouched() {
        let update = draft().validate_update().unwrap();
        assert_eq!(update.sku, None);
        assert_eq!(update.name.as_deref(), Some("Classic Tee"));
        assert_eq!(update.variations.map(|v| v.len()), Some(1));
    }
}
