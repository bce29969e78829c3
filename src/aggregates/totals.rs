//! Money totals.

use crate::model::OrderItem;

pub fn line_total(price: f64, quantity: u32) -> f64 {
    price * f64::from(quantity)
}

/// Sum of `price × quantity` over `(price, quantity)` pairs.
pub fn sum_lines(lines: impl IntoIterator<Item = (f64, u32)>) -> f64 {
    lines
        .into_iter()
        .map(|(price, quantity)| line_total(price, quantity))
        .sum()
}

pub fn order_total(items: &[OrderItem]) -> f64 {
    sum_lines(items.iter().map(|item| (item.price, item.quantity)))
}
