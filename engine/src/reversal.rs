//! Reversal handler: undo for committed purchase records
//!
//! Deleting a purchase restores the ledger by the purchased quantity,
//! clamped at zero. If intervening sales already consumed the purchased
//! stock, the reversal stops at zero rather than going negative.

use uuid::Uuid;

use shared::models::{Purchase, Sale};

use crate::error::{PosError, PosResult};
use crate::store::PosStore;

impl PosStore {
    /// Delete a purchase record and back its quantity out of the ledger
    pub fn delete_purchase(&mut self, id: Uuid) -> PosResult<Purchase> {
        let index = self
            .purchases
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PosError::NotFound("Purchase".to_string()))?;
        let purchase = self.purchases.remove(index);

        // Name join: a product renamed since the purchase matches nothing,
        // and its stock stays as it is.
        let restored = self
            .ledger
            .adjust_stock_by_name(&purchase.product, -(purchase.quantity as i32));
        if restored.is_none() {
            tracing::warn!(
                product = %purchase.product,
                "deleted purchase matches no ledger entry; stock unchanged"
            );
        }
        tracing::info!(
            purchase = %purchase.id,
            product = %purchase.product,
            quantity = purchase.quantity,
            "purchase deleted"
        );
        Ok(purchase)
    }

    /// Delete a sale record
    ///
    /// Sales have no reversal path: the record goes away and stock stays
    /// put. Deleting history must not resurrect inventory.
    pub fn delete_sale(&mut self, id: u64) -> PosResult<Sale> {
        let index = self
            .sales
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| PosError::NotFound("Sale".to_string()))?;
        let sale = self.sales.remove(index);
        tracing::info!(sale = sale.id, "sale record deleted");
        Ok(sale)
    }
}
