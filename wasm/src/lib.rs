//! WebAssembly module for the Coffee UrbanTech point of sale
//!
//! Exposes the sale/inventory engine to the JavaScript presentation layer.
//! All state lives on the Rust side; the screens talk JSON across the
//! boundary and re-render from whatever they read back.

use engine::{PosConfig, PosError, PosStore};
use uuid::Uuid;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"coffee-pos engine loaded".into());
}

fn to_js(err: PosError) -> JsValue {
    match serde_json::to_string(&err.detail()) {
        Ok(json) => JsValue::from_str(&json),
        Err(_) => JsValue::from_str(&err.to_string()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("serialization error: {}", e)))
}

fn parse_id(id: &str) -> Result<Uuid, JsValue> {
    Uuid::parse_str(id).map_err(|_| JsValue::from_str("invalid product id"))
}

/// The register, owned by the WASM side for the lifetime of the session
#[wasm_bindgen]
pub struct PosApp {
    store: PosStore,
}

#[wasm_bindgen]
impl PosApp {
    /// Create a register, optionally from a JSON `PosConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PosApp, JsValue> {
        let config = match config_json {
            Some(raw) => serde_json::from_str::<PosConfig>(&raw)
                .map_err(|e| JsValue::from_str(&format!("invalid config: {}", e)))?,
            None => PosConfig::default(),
        };
        Ok(PosApp {
            store: PosStore::new(config),
        })
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    pub fn products(&self) -> Result<String, JsValue> {
        to_json(&self.store.products())
    }

    pub fn sales(&self) -> Result<String, JsValue> {
        to_json(&self.store.sales())
    }

    pub fn purchases(&self) -> Result<String, JsValue> {
        to_json(&self.store.purchases())
    }

    pub fn cart(&self) -> Result<String, JsValue> {
        to_json(&self.store.cart().items())
    }

    /// Cart total as a decimal string, exact to the cent
    pub fn cart_total(&self) -> String {
        self.store.cart().total().to_string()
    }

    pub fn summary(&self) -> Result<String, JsValue> {
        to_json(&self.store.summary())
    }

    pub fn recent_activity(&self, limit: u32) -> Result<String, JsValue> {
        to_json(&self.store.recent_activity(limit as usize))
    }

    pub fn low_stock(&self) -> Result<String, JsValue> {
        to_json(&self.store.low_stock())
    }

    // ------------------------------------------------------------------
    // Inventory screen
    // ------------------------------------------------------------------

    pub fn add_product(&mut self, input_json: &str) -> Result<String, JsValue> {
        let input = serde_json::from_str(input_json)
            .map_err(|e| JsValue::from_str(&format!("invalid product: {}", e)))?;
        let product = self.store.add_product(input).map_err(to_js)?;
        to_json(&product)
    }

    pub fn update_product(&mut self, id: &str, update_json: &str) -> Result<String, JsValue> {
        let id = parse_id(id)?;
        let update = serde_json::from_str(update_json)
            .map_err(|e| JsValue::from_str(&format!("invalid update: {}", e)))?;
        let product = self.store.update_product(id, update).map_err(to_js)?;
        to_json(&product)
    }

    pub fn remove_product(&mut self, id: &str) -> Result<String, JsValue> {
        let id = parse_id(id)?;
        let product = self.store.remove_product(id).map_err(to_js)?;
        to_json(&product)
    }

    // ------------------------------------------------------------------
    // Sales screen
    // ------------------------------------------------------------------

    pub fn add_to_cart(&mut self, product_id: &str) -> Result<(), JsValue> {
        let id = parse_id(product_id)?;
        self.store.add_to_cart(id).map_err(to_js)
    }

    pub fn change_cart_quantity(&mut self, product_id: &str, delta: i32) -> Result<(), JsValue> {
        let id = parse_id(product_id)?;
        self.store.change_cart_quantity(id, delta).map_err(to_js)
    }

    pub fn remove_from_cart(&mut self, product_id: &str) -> Result<(), JsValue> {
        let id = parse_id(product_id)?;
        self.store.remove_from_cart(id);
        Ok(())
    }

    pub fn clear_cart(&mut self) {
        self.store.clear_cart();
    }

    pub fn commit_sale(&mut self) -> Result<String, JsValue> {
        let sale = self.store.commit_sale().map_err(to_js)?;
        to_json(&sale)
    }

    pub fn delete_sale(&mut self, id: u64) -> Result<String, JsValue> {
        let sale = self.store.delete_sale(id).map_err(to_js)?;
        to_json(&sale)
    }

    // ------------------------------------------------------------------
    // Purchases screen
    // ------------------------------------------------------------------

    pub fn commit_purchase(&mut self, input_json: &str) -> Result<String, JsValue> {
        let input = serde_json::from_str(input_json)
            .map_err(|e| JsValue::from_str(&format!("invalid purchase: {}", e)))?;
        let purchase = self.store.commit_purchase(input).map_err(to_js)?;
        to_json(&purchase)
    }

    pub fn delete_purchase(&mut self, id: &str) -> Result<String, JsValue> {
        let id = parse_id(id)?;
        let purchase = self.store.delete_purchase(id).map_err(to_js)?;
        to_json(&purchase)
    }
}

// ----------------------------------------------------------------------
// Form field helpers
// ----------------------------------------------------------------------

/// Validate a price form field before submission
#[wasm_bindgen]
pub fn is_valid_price(input: &str) -> bool {
    shared::validation::parse_price(input).is_ok()
}

/// Validate a purchase unit cost form field
#[wasm_bindgen]
pub fn is_valid_unit_cost(input: &str) -> bool {
    shared::validation::parse_unit_cost(input).is_ok()
}

/// Validate a quantity form field before submission
#[wasm_bindgen]
pub fn is_valid_quantity(input: &str) -> bool {
    shared::validation::parse_quantity(input).is_ok()
}

/// Validate a stock form field before submission
#[wasm_bindgen]
pub fn is_valid_stock(input: &str) -> bool {
    shared::validation::parse_stock(input).is_ok()
}
