//! Error handling for the point of sale engine
//!
//! Provides consistent error reporting in English and Spanish

use serde::Serialize;
use thiserror::Error;

/// Engine error types
///
/// None of these are fatal: every failing operation leaves the store
/// unchanged, and the presentation layer recovers by showing the error and
/// letting the user retry or dismiss.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PosError {
    // Stock errors
    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },

    // Commit precondition errors
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid purchase: {0}")]
    InvalidPurchase(String),

    // Lookup errors
    #[error("{0} not found")]
    NotFound(String),

    // Input validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_es: String,
    },
}

impl PosError {
    /// Shorthand for a field validation failure
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
        message_es: impl Into<String>,
    ) -> Self {
        PosError::Validation {
            field: field.into(),
            message: message.into(),
            message_es: message_es.into(),
        }
    }

    /// Render the error for the presentation layer
    pub fn detail(&self) -> ErrorDetail {
        match self {
            PosError::InsufficientStock {
                product,
                requested,
                available,
            } => ErrorDetail {
                code: "INSUFFICIENT_STOCK".to_string(),
                message_en: format!(
                    "Insufficient stock for {} (requested {}, available {})",
                    product, requested, available
                ),
                message_es: "Stock insuficiente".to_string(),
                field: None,
            },
            PosError::EmptyCart => ErrorDetail {
                code: "EMPTY_CART".to_string(),
                message_en: "There are no products in the sale".to_string(),
                message_es: "No hay productos en la venta".to_string(),
                field: None,
            },
            PosError::InvalidPurchase(msg) => ErrorDetail {
                code: "INVALID_PURCHASE".to_string(),
                message_en: format!("Invalid purchase: {}", msg),
                message_es: format!("Compra inválida: {}", msg),
                field: None,
            },
            PosError::NotFound(resource) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message_en: format!("{} not found", resource),
                message_es: format!("No se encontró {}", resource),
                field: None,
            },
            PosError::Validation {
                field,
                message,
                message_es,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_es: message_es.clone(),
                field: Some(field.clone()),
            },
        }
    }
}

/// Error payload rendered to the user
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_es: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Result type alias for engine operations
pub type PosResult<T> = Result<T, PosError>;
