//! Validation utilities for the Coffee UrbanTech point of sale
//!
//! Form fields arrive from the presentation layer as strings. Every parse
//! goes through one of these helpers and returns a typed value or an error;
//! nothing downstream accepts an unparsed string.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::UNKNOWN_SUPPLIER;

// ============================================================================
// Numeric Form Fields
// ============================================================================

/// Parse a sale price or product cost; zero is allowed
pub fn parse_price(input: &str) -> Result<Decimal, &'static str> {
    let value = Decimal::from_str(input.trim()).map_err(|_| "Price must be a number")?;
    if value < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(value)
}

/// Parse a purchase unit cost; must be strictly positive
pub fn parse_unit_cost(input: &str) -> Result<Decimal, &'static str> {
    let value = Decimal::from_str(input.trim()).map_err(|_| "Unit cost must be a number")?;
    if value <= Decimal::ZERO {
        return Err("Unit cost must be positive");
    }
    Ok(value)
}

/// Parse an initial or edited stock count; zero is allowed
pub fn parse_stock(input: &str) -> Result<u32, &'static str> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| "Stock must be a whole number of zero or more")
}

/// Parse a purchase quantity; must be at least 1
pub fn parse_quantity(input: &str) -> Result<u32, &'static str> {
    let value = input
        .trim()
        .parse::<u32>()
        .map_err(|_| "Quantity must be a whole number")?;
    if value == 0 {
        return Err("Quantity must be at least 1");
    }
    Ok(value)
}

// ============================================================================
// Text Form Fields
// ============================================================================

/// Validate a product name before it reaches the ledger
pub fn validate_product_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Product name cannot be empty");
    }
    Ok(())
}

/// Normalize the free-text supplier field
///
/// Absent or blank input falls back to [`UNKNOWN_SUPPLIER`].
pub fn normalize_supplier(input: Option<&str>) -> String {
    match input.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNKNOWN_SUPPLIER.to_string(),
    }
}
