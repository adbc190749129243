//! Shared types and models for the Coffee UrbanTech point of sale
//!
//! This crate contains types shared between the sale/inventory engine,
//! the frontend (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
