//! Sale history models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;

/// One line of an in-progress or committed sale
///
/// Name and price are copied from the product when the line is created; the
/// line stays valid even if the product is edited or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleLineItem {
    pub product_id: Uuid,
    pub name: String,
    /// Price per unit at the time the line was added
    pub unit_price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
}

impl SaleLineItem {
    /// Open a new line for a product at quantity 1
    pub fn open(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity: 1,
            subtotal: product.unit_price,
        }
    }

    /// Set the quantity, keeping the subtotal consistent
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.subtotal = self.unit_price * Decimal::from(quantity);
    }
}

/// An immutable, committed sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Monotonically assigned receipt number
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub items: Vec<SaleLineItem>,
    pub total: Decimal,
}

impl Sale {
    /// Build a sale record from snapshotted line items
    pub fn from_items(id: u64, timestamp: DateTime<Utc>, items: Vec<SaleLineItem>) -> Self {
        let total = items.iter().map(|item| item.subtotal).sum();
        Self {
            id,
            timestamp,
            items,
            total,
        }
    }
}
