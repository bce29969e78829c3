//! Stock projections over a product's variations.

use crate::model::{Product, ProductVariation};

pub fn total_stock(product: &Product) -> u64 {
    product.variations.iter().map(|v| u64::from(v.stock)).sum()
}

/// Unique sizes and colors of a variation list, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariationSummary {
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

impl VariationSummary {
    pub fn of(variations: &[ProductVariation]) -> Self {
        let mut summary = Self::default();
        for variation in variations {
            push_unique(&mut summary.sizes, &variation.size);
            push_unique(&mut summary.colors, &variation.color);
        }
        summary
    }
}

/// Distinct categories across the catalog, in order of first appearance.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = Vec::new();
    for product in products {
        push_unique(&mut out, &product.category);
    }
    out
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn product(category: &str, variations: Vec<ProductVariation>) -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Classic Tee".into(),
            category: category.into(),
            price: 499.0,
            sku: None,
            image: None,
            variations,
        }
    }

    #[test]
    fn test_total_stock_sums_variations() {
        let tee = product(
            "T-Shirts",
            vec![
                ProductVariation::new("M", "Black", 15),
                ProductVariation::new("L", "White", 8),
            ],
        );
        assert_eq!(total_stock(&tee), 23);
    }

    #[test]
    fn test_summary_dedups_in_first_occurrence_order() {
        let variations = vec![
            ProductVariation::new("L", "White", 1),
            ProductVariation::new("M", "Black", 1),
            ProductVariation::new("L", "Black", 1),
            ProductVariation::new("S", "White", 1),
        ];
        let summary = VariationSummary::of(&variations);
        assert_eq!(summary.sizes, vec!["L", "M", "S"]);
        assert_eq!(summary.colors, vec!["White", "Black"]);
    }

    #[test]
    fn test_categories() {
        let catalog = vec![
            product("Hoodies", vec![]),
            product("T-Shirts", vec![]),
            product("Hoodies", vec![]),
        ];
        assert_eq!(categories(&catalog), vec!["Hoodies", "T-Shirts"]);
    }
}
