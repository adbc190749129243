//! The shared point of sale state
//!
//! Views never hold pieces of this state or mutate it ad hoc: everything
//! goes through the operations defined here and in the committer and
//! reversal modules. Stock mutation stays centralized in the ledger's
//! clamped adjustment.

use uuid::Uuid;

use shared::models::{Product, Purchase, Sale};

use crate::cart::Cart;
use crate::config::PosConfig;
use crate::error::PosResult;
use crate::ledger::{Ledger, NewProduct, ProductUpdate};

#[derive(Debug)]
pub struct PosStore {
    pub(crate) config: PosConfig,
    pub(crate) ledger: Ledger,
    pub(crate) cart: Cart,
    pub(crate) sales: Vec<Sale>,
    pub(crate) purchases: Vec<Purchase>,
    pub(crate) next_sale_id: u64,
}

impl Default for PosStore {
    fn default() -> Self {
        Self::new(PosConfig::default())
    }
}

impl PosStore {
    pub fn new(config: PosConfig) -> Self {
        Self {
            config,
            ledger: Ledger::new(),
            cart: Cart::new(),
            sales: Vec::new(),
            purchases: Vec::new(),
            next_sale_id: 1,
        }
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &PosConfig {
        &self.config
    }

    pub fn products(&self) -> &[Product] {
        self.ledger.products()
    }

    /// Committed sales, in commit order (presentation re-sorts as needed)
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Committed purchases, most recent first
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Products running low against the configured threshold
    pub fn low_stock(&self) -> Vec<&Product> {
        self.ledger.low_stock(self.config.low_stock_threshold)
    }

    // ------------------------------------------------------------------
    // Ledger operations
    // ------------------------------------------------------------------

    pub fn add_product(&mut self, input: NewProduct) -> PosResult<Product> {
        self.ledger.add_product(input)
    }

    pub fn update_product(&mut self, id: Uuid, update: ProductUpdate) -> PosResult<Product> {
        self.ledger.update_product(id, update)
    }

    pub fn remove_product(&mut self, id: Uuid) -> PosResult<Product> {
        self.ledger.remove_product(id)
    }

    // ------------------------------------------------------------------
    // Cart operations
    // ------------------------------------------------------------------

    pub fn add_to_cart(&mut self, product_id: Uuid) -> PosResult<()> {
        self.cart.add_item(&self.ledger, product_id)
    }

    pub fn change_cart_quantity(&mut self, product_id: Uuid, delta: i32) -> PosResult<()> {
        self.cart.change_quantity(&self.ledger, product_id, delta)
    }

    pub fn remove_from_cart(&mut self, product_id: Uuid) {
        self.cart.remove_item(product_id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear()
    }
}
