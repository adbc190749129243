//! Configuration for the point of sale engine
//!
//! The engine takes a plain options struct at construction; the embedding
//! application deserializes it from whatever source it keeps settings in.

use serde::Deserialize;

/// Point of sale options
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PosConfig {
    /// Stock level below which a product is flagged as running low
    pub low_stock_threshold: u32,

    /// Currency symbol prefixed to rendered amounts
    pub currency: String,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 10,
            currency: "$".to_string(),
        }
    }
}
