//! List filters for the catalog and order views.
//!
//! Every filter is a conjunction of independent predicates. A [`Selection::All`] predicate
//! and an empty search string both match everything.

use crate::model::{Order, OrderStatus, Product};
use std::convert::Infallible;
use std::str::FromStr;

/// Dropdown value: either the `"all"` sentinel or one concrete choice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn matches(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => pred(value),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

/// The dropdown sentinel, matched without regard to case or surrounding whitespace.
fn is_all(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("all")
}

impl FromStr for Selection<String> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if is_all(s) {
            Selection::All
        } else {
            Selection::Only(s.trim().to_string())
        })
    }
}

impl FromStr for Selection<OrderStatus> {
    type Err = crate::model::UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_all(s) {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFilter {
    /// Matched against name and SKU.
    pub search: String,
    pub category: Selection<String>,
    pub size: Selection<String>,
    pub color: Selection<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        let search_ok = needle.is_empty()
            || contains_ignore_case(&product.name, &needle)
            || product
                .sku
                .as_deref()
                .is_some_and(|sku| contains_ignore_case(sku, &needle));

        search_ok
            && self.category.matches(|c| &product.category == c)
            && self.size.matches(|s| product.has_size(s))
            && self.color.matches(|c| product.has_color(c))
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderFilter {
    /// Matched against customer name and order id.
    pub search: String,
    pub status: Selection<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        let needle = self.search.trim().to_lowercase();
        let search_ok = needle.is_empty()
            || contains_ignore_case(&order.customer_name, &needle)
            || contains_ignore_case(order.id.as_str(), &needle);

        search_ok && self.status.matches(|s| order.status == *s)
    }

    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        OrderId, PaymentMethod, PaymentStatus, ProductId, ProductVariation,
    };
    use chrono::Utc;

    fn product(name: &str, category: &str, sku: Option<&str>, variations: &[(&str, &str)]) -> Product {
        Product {
            id: ProductId::new(name),
            name: name.into(),
            category: category.into(),
            price: 10.0,
            sku: sku.map(String::from),
            image: None,
            variations: variations
                .iter()
                .map(|(size, color)| ProductVariation::new(*size, *color, 1))
                .collect(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Classic Tee", "T-Shirts", Some("TSH-CLA-000001"), &[("M", "Black"), ("L", "White")]),
            product("Zip Hoodie", "Hoodies", Some("HOO-ZIP-000002"), &[("XL", "Grey")]),
            product("Denim Jacket", "Jackets", None, &[("M", "Blue")]),
        ]
    }

    fn order(id: &str, customer: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(id),
            customer_name: customer.into(),
            customer_email: "someone@example.com".into(),
            customer_phone: "555-0100".into(),
            shipping_address: "1 Main St".into(),
            payment_status: PaymentStatus::Pending,
            payment_method: PaymentMethod::CreditCard,
            status,
            items: Vec::new(),
            total_amount: 0.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_default_filter_returns_everything() {
        let products = catalog();
        assert_eq!(ProductFilter::default().apply(&products).len(), 3);

        let orders = vec![
            order("order-1", "Ann", OrderStatus::Pending),
            order("order-2", "Bob", OrderStatus::Cancelled),
        ];
        assert_eq!(OrderFilter::default().apply(&orders).len(), 2);
    }

    #[test]
    fn test_product_search_is_case_insensitive_over_name_and_sku() {
        let products = catalog();
        let by_name = ProductFilter {
            search: "hOoDiE".into(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&products)[0].name, "Zip Hoodie");

        let by_sku = ProductFilter {
            search: "tsh-cla".into(),
            ..Default::default()
        };
        assert_eq!(by_sku.apply(&products)[0].name, "Classic Tee");
    }

    #[test]
    fn test_product_predicates_are_conjunctive() {
        let products = catalog();
        let filter = ProductFilter {
            size: Selection::Only("M".into()),
            color: Selection::Only("Blue".into()),
            ..Default::default()
        };
        let names: Vec<_> = filter.apply(&products).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Denim Jacket"]);

        let none = ProductFilter {
            category: "Hoodies".parse().unwrap(),
            size: Selection::Only("M".into()),
            ..Default::default()
        };
        assert!(none.apply(&products).is_empty());
    }

    #[test]
    fn test_order_filter_by_status_and_search() {
        let orders = vec![
            order("order-1", "Ann Lee", OrderStatus::Pending),
            order("order-2", "Bob Stone", OrderStatus::Completed),
            order("order-3", "Annie Park", OrderStatus::Completed),
        ];
        let filter = OrderFilter {
            search: "ann".into(),
            status: "completed".parse().unwrap(),
        };
        let ids: Vec<_> = filter.apply(&orders).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["order-3"]);

        let by_id = OrderFilter {
            search: "ORDER-2".into(),
            status: "all".parse().unwrap(),
        };
        assert_eq!(by_id.apply(&orders)[0].customer_name, "Bob Stone");
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<Selection<String>>().unwrap(), Selection::All);
        assert_eq!(
            "Black".parse::<Selection<String>>().unwrap(),
            Selection::Only("Black".to_string())
        );
        assert!("shipped".parse::<Selection<OrderStatus>>().is_err());

        for sentinel in ["all", " ALL ", "All"] {
            assert_eq!(sentinel.parse::<Selection<String>>().unwrap(), Selection::All);
            assert_eq!(sentinel.parse::<Selection<OrderStatus>>().unwrap(), Selection::All);
        }
        assert_eq!(
            " Hoodies ".parse::<Selection<String>>().unwrap(),
            Selection::Only("Hoodies".to_string())
        );
    }
}
