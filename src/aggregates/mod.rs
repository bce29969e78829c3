//! Pure derivations over catalog and order snapshots. Nothing here is cached; callers
//! recompute from a fresh `list()` whenever they need a view.

pub mod dashboard;
pub mod filter;
pub mod matrix;
pub mod stock;
pub mod totals;

pub use dashboard::{recent_orders, InventoryStats, OrderStats};
pub use filter::{OrderFilter, ProductFilter, Selection};
pub use matrix::{matrix_key, Cell, VariationMatrix};
pub use stock::{categories, total_stock, VariationSummary};
pub use totals::{line_total, order_total, sum_lines};
