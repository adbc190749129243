//! Common types used across the point of sale

use serde::{Deserialize, Serialize};

/// Product categories offered at the register
///
/// This is the closed set the product pickers show; free-text categories are
/// not accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Beverages,
    Food,
    Desserts,
    Other,
}

impl Category {
    /// Label as shown in the Spanish-language UI
    pub fn label_es(&self) -> &'static str {
        match self {
            Category::Beverages => "Bebidas",
            Category::Food => "Comida",
            Category::Desserts => "Postres",
            Category::Other => "Otros",
        }
    }

    /// All categories, in picker order
    pub fn all() -> &'static [Category] {
        &[
            Category::Beverages,
            Category::Food,
            Category::Desserts,
            Category::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Beverages => write!(f, "Beverages"),
            Category::Food => write!(f, "Food"),
            Category::Desserts => write!(f, "Desserts"),
            Category::Other => write!(f, "Other"),
        }
    }
}
