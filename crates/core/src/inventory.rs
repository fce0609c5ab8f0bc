//! Outcome of an inventory lookup as seen by callers.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Result of asking the inventory endpoint how many units of a product exist.
///
/// `Unavailable` is the only failure signal a caller ever sees. It covers a
/// product the endpoint does not know as well as an endpoint that could not be
/// reached; the two are deliberately indistinguishable here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryResult {
    /// Available unit count. Zero is a real answer ("none left").
    Units(u64),
    /// The count could not be determined.
    Unavailable,
}

impl InventoryResult {
    pub fn units(&self) -> Option<u64> {
        match self {
            Self::Units(n) => Some(*n),
            Self::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl ValueObject for InventoryResult {}

impl From<Option<u64>> for InventoryResult {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unavailable, Self::Units)
    }
}

impl From<InventoryResult> for Option<u64> {
    fn from(value: InventoryResult) -> Self {
        value.units()
    }
}
