//! Wire shape of the inventory endpoint's response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LookupError;

/// `GET /api/inventory` success body.
///
/// Only `availableUnits` is read; other fields the service sends are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_units: Option<u64>,
}

impl InventoryResponse {
    /// Parse a response body and pull out the unit count.
    ///
    /// `null`, a missing field, negative and fractional numbers are all
    /// rejected; the first two as [`LookupError::MissingField`], the rest as
    /// [`LookupError::Malformed`].
    pub fn parse_units(body: &[u8]) -> Result<u64, LookupError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| LookupError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(LookupError::Malformed("expected a JSON object".to_string()));
        }

        let response: Self =
            serde_json::from_value(value).map_err(|e| LookupError::Malformed(e.to_string()))?;
        response.available_units.ok_or(LookupError::MissingField)
    }
}
