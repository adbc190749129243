//! Purchase history models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supplier recorded when the purchase form leaves the field blank
pub const UNKNOWN_SUPPLIER: &str = "N/A";

/// An immutable, committed stock purchase
///
/// `product` is a name snapshot, not an id: purchase history joins back to
/// the ledger by product name, and a renamed product no longer matches
/// records written under the old name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub supplier: String,
    /// Product name at the time of purchase
    pub product: String,
    pub quantity: u32,
    pub unit_cost: Decimal,
    pub total: Decimal,
}
