//! Neutral availability states a storefront renders from an inventory lookup.

use serde::{Deserialize, Serialize};

use crate::inventory::InventoryResult;
use crate::value_object::ValueObject;

/// What a product page should show about stock.
///
/// Derived from [`InventoryResult`]; an unavailable lookup maps to `Unknown`,
/// never to `OutOfStock`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Unknown,
    OutOfStock,
    InStock(u64),
}

impl Availability {
    /// Whether a buyer can add the product to a cart right now.
    pub fn is_purchasable(&self) -> bool {
        matches!(self, Self::InStock(_))
    }

    /// Stable machine-readable name (used as an analytics/event-queue value).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::OutOfStock => "out_of_stock",
            Self::InStock(_) => "in_stock",
        }
    }
}

impl ValueObject for Availability {}

impl From<InventoryResult> for Availability {
    fn from(value: InventoryResult) -> Self {
        match value {
            InventoryResult::Unavailable => Self::Unknown,
            InventoryResult::Units(0) => Self::OutOfStock,
            InventoryResult::Units(n) => Self::InStock(n),
        }
    }
}

impl core::fmt::Display for Availability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unknown => f.write_str("Availability unknown"),
            Self::OutOfStock => f.write_str("Out of stock"),
            Self::InStock(n) => write!(f, "{n} in stock"),
        }
    }
}
