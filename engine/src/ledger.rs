//! Inventory ledger: the live product table
//!
//! The ledger is the source of truth for quantity on hand. Stock only ever
//! changes through the `adjust_stock*` methods, which clamp at zero, so a
//! negative on-hand count is unrepresentable no matter what sequence of
//! sales, purchases, and reversals runs against it.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use shared::models::Product;
use shared::types::Category;
use shared::validation::validate_product_name;

use crate::error::{PosError, PosResult};

/// Input for adding a product to the ledger
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    pub unit_price: Decimal,
    /// Acquisition cost; optional for sale-only products
    pub unit_cost: Option<Decimal>,
    #[serde(default)]
    pub stock: u32,
}

/// Input for editing a product; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub unit_price: Option<Decimal>,
    pub unit_cost: Option<Decimal>,
    pub stock: Option<u32>,
}

/// The live product table
#[derive(Debug, Default)]
pub struct Ledger {
    products: Vec<Product>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All products, in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Linear lookup by exact name
    ///
    /// Name is the join key the purchase flows use. A renamed product no
    /// longer matches records written under its old name.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Add a product and return the stored record
    pub fn add_product(&mut self, input: NewProduct) -> PosResult<Product> {
        input.validate().map_err(|_| {
            PosError::validation(
                "name",
                "Product name cannot be empty",
                "El nombre del producto no puede estar vacío",
            )
        })?;
        validate_product_name(&input.name).map_err(|msg| {
            PosError::validation("name", msg, "El nombre del producto no puede estar vacío")
        })?;
        validate_amounts(input.unit_price, input.unit_cost)?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            description: input.description,
            category: input.category,
            unit_price: input.unit_price,
            unit_cost: input.unit_cost,
            stock: input.stock,
            created_at: now,
            updated_at: now,
        };
        tracing::debug!(product = %product.name, stock = product.stock, "product added");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Apply a partial edit and return the updated record
    pub fn update_product(&mut self, id: Uuid, update: ProductUpdate) -> PosResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PosError::NotFound("Product".to_string()))?;
        let existing = &self.products[index];

        let name = update.name.unwrap_or_else(|| existing.name.clone());
        let description = update
            .description
            .unwrap_or_else(|| existing.description.clone());
        let category = update.category.unwrap_or(existing.category);
        let unit_price = update.unit_price.unwrap_or(existing.unit_price);
        let unit_cost = update.unit_cost.or(existing.unit_cost);
        let stock = update.stock.unwrap_or(existing.stock);

        validate_product_name(&name).map_err(|msg| {
            PosError::validation("name", msg, "El nombre del producto no puede estar vacío")
        })?;
        validate_amounts(unit_price, unit_cost)?;

        let product = &mut self.products[index];
        product.name = name.trim().to_string();
        product.description = description;
        product.category = category;
        product.unit_price = unit_price;
        product.unit_cost = unit_cost;
        product.stock = stock;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    /// Delete a product regardless of its stock level
    ///
    /// Historical records are untouched; they carry their own snapshots.
    pub fn remove_product(&mut self, id: Uuid) -> PosResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PosError::NotFound("Product".to_string()))?;
        let product = self.products.remove(index);
        tracing::debug!(product = %product.name, "product removed");
        Ok(product)
    }

    /// Apply a stock delta by product id, clamped at zero
    ///
    /// Returns the new stock, or `None` when no product matches.
    pub fn adjust_stock(&mut self, id: Uuid, delta: i32) -> Option<u32> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        Some(apply_delta(product, delta))
    }

    /// Apply a stock delta by exact product name, clamped at zero
    ///
    /// Returns the new stock, or `None` when no product matches. A product
    /// renamed after a record was written no longer matches that record.
    pub fn adjust_stock_by_name(&mut self, name: &str, delta: i32) -> Option<u32> {
        let product = self.products.iter_mut().find(|p| p.name == name)?;
        Some(apply_delta(product, delta))
    }

    /// Products whose stock has fallen below the threshold
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.stock < threshold)
            .collect()
    }
}

fn apply_delta(product: &mut Product, delta: i32) -> u32 {
    product.stock = product.stock.saturating_add_signed(delta);
    product.updated_at = Utc::now();
    tracing::debug!(product = %product.name, delta, stock = product.stock, "stock adjusted");
    product.stock
}

fn validate_amounts(unit_price: Decimal, unit_cost: Option<Decimal>) -> PosResult<()> {
    if unit_price < Decimal::ZERO {
        return Err(PosError::validation(
            "unit_price",
            "Price cannot be negative",
            "El precio no puede ser negativo",
        ));
    }
    if let Some(cost) = unit_cost {
        if cost < Decimal::ZERO {
            return Err(PosError::validation(
                "unit_cost",
                "Cost cannot be negative",
                "El costo no puede ser negativo",
            ));
        }
    }
    Ok(())
}
