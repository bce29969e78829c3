//! Dashboard statistics.

use crate::aggregates::total_stock;
use crate::model::{Order, OrderStatus, Product};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryStats {
    pub product_count: usize,
    pub total_stock: u64,
    /// Variations with `0 < stock <= threshold`.
    pub low_stock_variations: usize,
    pub out_of_stock_variations: usize,
}

impl InventoryStats {
    pub fn compute(products: &[Product], low_stock_threshold: u32) -> Self {
        let variations = || products.iter().flat_map(|p| p.variations.iter());
        Self {
            product_count: products.len(),
            total_stock: products.iter().map(total_stock).sum(),
            low_stock_variations: variations()
                .filter(|v| v.stock > 0 && v.stock <= low_stock_threshold)
                .count(),
            out_of_stock_variations: variations().filter(|v| v.stock == 0).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderStats {
    pub order_count: usize,
    pub by_status: BTreeMap<OrderStatus, usize>,
    /// Sum of stored totals over completed orders.
    pub revenue: f64,
}

impl OrderStats {
    pub fn compute(orders: &[Order]) -> Self {
        let mut by_status: BTreeMap<OrderStatus, usize> =
            OrderStatus::ALL.iter().map(|s| (*s, 0)).collect();
        let mut revenue = 0.0;
        for order in orders {
            *by_status.entry(order.status).or_default() += 1;
            if order.status == OrderStatus::Completed {
                revenue += order.total_amount;
            }
        }
        Self {
            order_count: orders.len(),
            by_status,
            revenue,
        }
    }

    pub fn count(&self, status: OrderStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// The `n` newest orders by creation time.
pub fn recent_orders(orders: &[Order], n: usize) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}
