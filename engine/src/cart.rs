//! Cart accumulator: the working set for the sale in progress
//!
//! The cart never mutates the ledger. It reads stock levels to keep
//! requested quantities honest, and everything it holds is a snapshot;
//! discarding the cart leaves no trace anywhere else.

use rust_decimal::Decimal;
use uuid::Uuid;

use shared::models::SaleLineItem;

use crate::error::{PosError, PosResult};
use crate::ledger::Ledger;

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<SaleLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in the order they were first added
    pub fn items(&self) -> &[SaleLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line subtotals; pure, no side effects
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.subtotal).sum()
    }

    /// Add one unit of a product
    ///
    /// Repeated adds merge into the existing line; a cart holds at most one
    /// line per product.
    pub fn add_item(&mut self, ledger: &Ledger, product_id: Uuid) -> PosResult<()> {
        let product = ledger
            .find_by_id(product_id)
            .ok_or_else(|| PosError::NotFound("Product".to_string()))?;

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(line) => {
                let requested = line.quantity + 1;
                if requested > product.stock {
                    return Err(PosError::InsufficientStock {
                        product: product.name.clone(),
                        requested,
                        available: product.stock,
                    });
                }
                line.set_quantity(requested);
            }
            None => {
                if product.stock == 0 {
                    return Err(PosError::InsufficientStock {
                        product: product.name.clone(),
                        requested: 1,
                        available: 0,
                    });
                }
                self.items.push(SaleLineItem::open(product));
            }
        }
        Ok(())
    }

    /// Apply a signed change to a line's quantity
    ///
    /// A result of zero or less removes the line. A result above the
    /// product's stock is rejected and the cart is left unchanged. Changing
    /// a product that has no line in the cart is a no-op.
    pub fn change_quantity(
        &mut self,
        ledger: &Ledger,
        product_id: Uuid,
        delta: i32,
    ) -> PosResult<()> {
        let product = ledger
            .find_by_id(product_id)
            .ok_or_else(|| PosError::NotFound("Product".to_string()))?;

        let Some(index) = self.items.iter().position(|i| i.product_id == product_id) else {
            tracing::debug!(product = %product.name, "quantity change for product not in cart");
            return Ok(());
        };

        let requested = i64::from(self.items[index].quantity) + i64::from(delta);
        if requested <= 0 {
            self.items.remove(index);
            return Ok(());
        }
        if requested > i64::from(product.stock) {
            return Err(PosError::InsufficientStock {
                product: product.name.clone(),
                requested: requested.min(i64::from(u32::MAX)) as u32,
                available: product.stock,
            });
        }
        self.items[index].set_quantity(requested as u32);
        Ok(())
    }

    /// Remove a line unconditionally
    pub fn remove_item(&mut self, product_id: Uuid) {
        self.items.retain(|item| item.product_id != product_id);
    }

    /// Empty the cart without touching the ledger
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drain the line items, leaving the cart empty
    pub(crate) fn take_items(&mut self) -> Vec<SaleLineItem> {
        std::mem::take(&mut self.items)
    }
}
