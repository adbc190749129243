//! Product catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Category;

/// A product in the live inventory ledger
///
/// Historical records never hold a reference to this type; they copy the
/// fields they need at commit time, so later edits here do not rewrite
/// history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Sale price per unit
    pub unit_price: Decimal,
    /// Acquisition cost per unit; absent for sale-only products
    pub unit_cost: Option<Decimal>,
    /// Quantity on hand; never negative
    pub stock: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product can currently be added to a sale
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
