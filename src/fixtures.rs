//! Seed data for the in-memory stores.
//!
//! The bundled document is compiled into the binary. Fixture records are inserted as-is,
//! keeping their readable ids and stored totals.

use crate::model::{Order, Product};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const SEED_JSON: &str = include_str!("../fixtures/seed.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid fixture: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl SeedData {
    /// The fixtures shipped with the crate.
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let data: SeedData = serde_json::from_str(json)?;
        data.check()?;
        Ok(data)
    }

    fn check(&self) -> Result<(), FixtureError> {
        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(&product.id) {
                return Err(FixtureError::Invalid(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.variations.is_empty() {
                return Err(FixtureError::Invalid(format!(
                    "product {} has no variations",
                    product.id
                )));
            }
        }

        let mut order_ids = HashSet::new();
        for order in &self.orders {
            if !order_ids.insert(&order.id) {
                return Err(FixtureError::Invalid(format!(
                    "duplicate order id {}",
                    order.id
                )));
            }
            if order.items.iter().any(|item| item.quantity == 0) {
                return Err(FixtureError::Invalid(format!(
                    "order {} has an item with quantity 0",
                    order.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::total_stock;
    use crate::model::{OrderId, OrderStatus};

    #[test]
    fn test_bundled_fixtures_parse() {
        let data = SeedData::bundled().unwrap();
        assert_eq!(data.products.len(), 4);
        assert_eq!(data.orders.len(), 4);
        assert_eq!(total_stock(&data.products[0]), 23);
    }

    #[test]
    fn test_order_one_total() {
        let data = SeedData::bundled().unwrap();
        let order = data
            .orders
            .iter()
            .find(|o| o.id == OrderId::new("order-1"))
            .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items[0].price, 499.0);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.total_amount, 998.0);
        assert_eq!(order.computed_total(), 998.0);
    }

    #[test]
    fn test_rejects_product_without_variations() {
        let json = r#"{"products": [{"id": "x", "name": "X", "category": "Y", "price": 1, "variations": []}]}"#;
        assert!(matches!(
            SeedData::from_json(json),
            Err(FixtureError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            SeedData::from_json("{\"products\": 3}"),
            Err(FixtureError::Parse(_))
        ));
    }
}
