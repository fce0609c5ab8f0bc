//! Why an inventory lookup failed.
//!
//! These causes are logged and then collapsed into
//! [`InventoryResult::Unavailable`](storefront_core::InventoryResult); they
//! are never returned from the public lookup.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The request never produced a response (DNS, refused connection, reset).
    #[error("network error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("inventory endpoint returned status {0}")]
    Status(u16),

    /// The response body could not be read to completion.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The body was not the expected JSON shape.
    #[error("malformed inventory payload: {0}")]
    Malformed(String),

    /// The body parsed but carried no `availableUnits` value.
    #[error("inventory payload has no availableUnits")]
    MissingField,
}
