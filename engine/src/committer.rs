//! Transaction committer: the only path from transient state to history
//!
//! Both commits are all-or-nothing: they validate everything before the
//! first ledger mutation, so a rejected commit leaves the cart, the ledger,
//! and the histories exactly as they were.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use shared::models::{Purchase, Sale};
use shared::validation::normalize_supplier;

use crate::error::{PosError, PosResult};
use crate::store::PosStore;

/// Input from the purchase form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PurchaseInput {
    /// Free-text supplier; blank falls back to "N/A"
    pub supplier: Option<String>,
    /// Product name as selected in the form picker
    #[validate(length(min = 1, message = "No product selected"))]
    pub product: String,
    pub quantity: u32,
    /// Cost per unit; falls back to the product's sale price when omitted
    pub unit_cost: Option<Decimal>,
}

impl PosStore {
    /// Turn the cart into an immutable sale and apply the stock deltas
    pub fn commit_sale(&mut self) -> PosResult<Sale> {
        if self.cart.is_empty() {
            return Err(PosError::EmptyCart);
        }

        // Validate every line against current stock before mutating. The
        // cart's own add-time guard makes this unreachable from normal UI
        // flow, but stock may have been edited underneath the cart.
        for item in self.cart.items() {
            if let Some(product) = self.ledger.find_by_id(item.product_id) {
                if item.quantity > product.stock {
                    return Err(PosError::InsufficientStock {
                        product: item.name.clone(),
                        requested: item.quantity,
                        available: product.stock,
                    });
                }
            }
            // A product deleted while in the cart does not block the sale;
            // its line commits as a snapshot and the decrement matches
            // nothing.
        }

        let items = self.cart.take_items();
        for item in &items {
            self.ledger.adjust_stock(item.product_id, -(item.quantity as i32));
        }

        let sale = Sale::from_items(self.next_sale_id, Utc::now(), items);
        self.next_sale_id += 1;
        tracing::info!(sale = sale.id, total = %sale.total, items = sale.items.len(), "sale committed");
        self.sales.push(sale.clone());
        Ok(sale)
    }

    /// Record a stock purchase and apply the stock increment
    pub fn commit_purchase(&mut self, input: PurchaseInput) -> PosResult<Purchase> {
        input
            .validate()
            .map_err(|_| PosError::InvalidPurchase("no product selected".to_string()))?;

        let name = input.product.trim();
        if name.is_empty() {
            return Err(PosError::InvalidPurchase("no product selected".to_string()));
        }
        if input.quantity == 0 {
            return Err(PosError::InvalidPurchase(
                "quantity must be at least 1".to_string(),
            ));
        }
        if let Some(cost) = input.unit_cost {
            if cost <= Decimal::ZERO {
                return Err(PosError::InvalidPurchase(
                    "unit cost must be positive".to_string(),
                ));
            }
        }

        let product = self
            .ledger
            .find_by_name(name)
            .ok_or_else(|| PosError::InvalidPurchase(format!("unknown product: {}", name)))?;
        // Cost basis falls back to the sale price when the form omits a cost
        let unit_cost = input.unit_cost.unwrap_or(product.unit_price);

        self.ledger
            .adjust_stock_by_name(name, input.quantity as i32);

        let purchase = Purchase {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            supplier: normalize_supplier(input.supplier.as_deref()),
            product: name.to_string(),
            quantity: input.quantity,
            unit_cost,
            total: unit_cost * Decimal::from(input.quantity),
        };
        tracing::info!(
            purchase = %purchase.id,
            product = %purchase.product,
            quantity = purchase.quantity,
            total = %purchase.total,
            "purchase committed"
        );
        self.purchases.insert(0, purchase.clone());
        Ok(purchase)
    }
}
