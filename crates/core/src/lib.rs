//! `storefront-core`: storefront domain building blocks.
//!
//! This crate contains **pure domain** types (no HTTP, no logging setup).

pub mod availability;
pub mod id;
pub mod inventory;
pub mod value_object;

pub use availability::Availability;
pub use id::ProductId;
pub use inventory::InventoryResult;
pub use value_object::ValueObject;
