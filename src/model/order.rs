//! Customer orders.
//!
//! Order items are point-in-time snapshots: the product name, unit price and variation are
//! copied when the item is added and never follow later catalog edits.

use crate::framework::GenerateId;
use crate::model::{OrderId, OrderItemId, OrderStatus, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Paypal,
    BankTransfer,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::CashOnDelivery => "cash_on_delivery",
        }
    }
}

/// The size/color an order item was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariationRef {
    pub size: String,
    pub color: String,
}

impl VariationRef {
    pub fn new(size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
    pub variation: VariationRef,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        crate::aggregates::line_total(self.price, self.quantity)
    }

    /// Same product and same size/color.
    pub fn same_line(&self, product_id: &ProductId, variation: &VariationRef) -> bool {
        &self.product_id == product_id && &self.variation == variation
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    /// Stored at submit time. Item edits made through order actions do not refresh it; see
    /// `OrderAction::RecalculateTotal`.
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn item(&self, id: &OrderItemId) -> Option<&OrderItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Total of the current items, which may differ from the stored `total_amount`.
    pub fn computed_total(&self) -> f64 {
        crate::aggregates::order_total(&self.items)
    }
}

/// An order line as submitted by the order form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
    pub variation: VariationRef,
}

impl OrderItemInput {
    pub fn into_item(self) -> OrderItem {
        OrderItem {
            id: OrderItemId::generate(),
            product_id: self.product_id,
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
            variation: self.variation,
        }
    }
}

/// Payload for creating an order. New orders always start as `pending`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItemInput>,
}

/// Partial order edit from the order form.
///
/// Status is not editable here; it only moves through `OrderAction::ChangeStatus`.
/// Replacing `items` recomputes `total_amount`, like a fresh submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderUpdate {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub items: Option<Vec<OrderItemInput>>,
}
