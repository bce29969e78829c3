//! Order form.

use crate::aggregates::sum_lines;
use crate::forms::{FieldError, ValidationErrors};
use crate::model::{
    OrderCreate, OrderItemInput, OrderUpdate, PaymentMethod, PaymentStatus, Product, VariationId,
    VariationRef,
};
use validator::ValidateEmail;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItemInput>,
}

impl OrderDraft {
    /// Add `quantity` units of one product variation, snapshotting its name and price.
    ///
    /// A second add of the same product and size/color merges into the existing line. The
    /// merged quantity may not exceed the variation's current stock.
    pub fn add_item(
        &mut self,
        product: &Product,
        variation_id: &VariationId,
        quantity: u32,
    ) -> Result<(), FieldError> {
        if quantity == 0 {
            return Err(FieldError::new("quantity", "Quantity must be at least 1"));
        }
        let variation = product
            .variation(variation_id)
            .ok_or_else(|| FieldError::new("variation", "Select a size and color"))?;
        let line = VariationRef::new(&variation.size, &variation.color);

        let existing = self
            .items
            .iter()
            .position(|i| i.product_id == product.id && i.variation == line);
        let already = existing.map_or(0, |idx| self.items[idx].quantity);
        let wanted = already.saturating_add(quantity);
        if wanted > variation.stock {
            return Err(FieldError::new(
                "quantity",
                format!("Only {} in stock", variation.stock),
            ));
        }

        match existing {
            Some(idx) => self.items[idx].quantity = wanted,
            None => self.items.push(OrderItemInput {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                quantity,
                price: product.price,
                variation: line,
            }),
        }
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Option<OrderItemInput> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Running total shown while the form is being filled in.
    pub fn preview_total(&self) -> f64 {
        sum_lines(self.items.iter().map(|i| (i.price, i.quantity)))
    }

    fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.customer_name.trim().is_empty() {
            errors.push("customerName", "Customer name is required");
        }
        if !self.customer_email.trim().validate_email() {
            errors.push("customerEmail", "A valid email is required");
        }
        if self.customer_phone.trim().is_empty() {
            errors.push("customerPhone", "Phone number is required");
        }
        if self.shipping_address.trim().is_empty() {
            errors.push("shippingAddress", "Shipping address is required");
        }
        if self.items.is_empty() {
            errors.push("items", "Add at least one item");
        }
        for (i, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                errors.push(format!("items[{}].quantity", i), "Quantity must be at least 1");
            }
            if !item.price.is_finite() || item.price < 0.0 {
                errors.push(format!("items[{}].price", i), "Price must be zero or more");
            }
        }
        errors
    }

    pub fn validate(&self) -> Result<OrderCreate, ValidationErrors> {
        self.check().into_result(OrderCreate {
            customer_name: self.customer_name.trim().to_string(),
            customer_email: self.customer_email.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            shipping_address: self.shipping_address.trim().to_string(),
            payment_status: self.payment_status,
            payment_method: self.payment_method,
            items: self.items.clone(),
        })
    }

    /// Validate an edit of an existing order. The item list is resubmitted, so the stored
    /// total is recomputed.
    pub fn validate_update(&self) -> Result<OrderUpdate, ValidationErrors> {
        let create = self.validate()?;
        Ok(OrderUpdate {
            customer_name: Some(create.customer_name),
            customer_email: Some(create.customer_email),
            customer_phone: Some(create.customer_phone),
            shipping_address: Some(create.shipping_address),
            payment_status: Some(create.payment_status),
            payment_method: Some(create.payment_method),
            items: Some(create.items),
        })
    }
}
