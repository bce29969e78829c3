//! Size × color availability grid.
//!
//! Cells are looked up by the `"size-color"` key. A combination the product does not offer is
//! [`Cell::NotAvailable`] and is left out of every total; it is not the same thing as a
//! variation that exists with zero stock.

use crate::aggregates::VariationSummary;
use crate::model::Product;
use std::collections::HashMap;
use std::fmt;

pub fn matrix_key(size: &str, color: &str) -> String {
    format!("{}-{}", size, color)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Stock(u32),
    NotAvailable,
}

impl Cell {
    /// What the cell adds to row, column and overall totals.
    pub fn contribution(self) -> u64 {
        match self {
            Cell::Stock(stock) => u64::from(stock),
            Cell::NotAvailable => 0,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Stock(stock) => write!(f, "{}", stock),
            Cell::NotAvailable => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariationMatrix {
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    stock: HashMap<String, u32>,
}

impl VariationMatrix {
    pub fn for_product(product: &Product) -> Self {
        let summary = VariationSummary::of(&product.variations);
        let stock = product
            .variations
            .iter()
            .map(|v| (matrix_key(&v.size, &v.color), v.stock))
            .collect();
        Self {
            sizes: summary.sizes,
            colors: summary.colors,
            stock,
        }
    }

    pub fn cell(&self, size: &str, color: &str) -> Cell {
        self.stock
            .get(&matrix_key(size, color))
            .map_or(Cell::NotAvailable, |&stock| Cell::Stock(stock))
    }

    pub fn row_total(&self, size: &str) -> u64 {
        self.colors
            .iter()
            .map(|color| self.cell(size, color).contribution())
            .sum()
    }

    pub fn column_total(&self, color: &str) -> u64 {
        self.sizes
            .iter()
            .map(|size| self.cell(size, color).contribution())
            .sum()
    }

    pub fn overall_total(&self) -> u64 {
        self.sizes.iter().map(|size| self.row_total(size)).sum()
    }

    /// Cells row by row, sizes down and colors across.
    pub fn rows(&self) -> Vec<(String, Vec<Cell>)> {
        self.sizes
            .iter()
            .map(|size| {
                let cells = self.colors.iter().map(|color| self.cell(size, color)).collect();
                (size.clone(), cells)
            })
            .collect()
    }
}
