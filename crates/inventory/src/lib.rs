//! Inventory lookup against the storefront's HTTP inventory endpoint.
//!
//! The public contract is deliberately fail-quiet: [`InventoryLookup`]
//! resolves to an [`InventoryResult`] and never returns an error. Failure
//! causes are kept internal (see [`LookupError`]) and surface only as a
//! `tracing` WARN event.

pub mod client;
pub mod config;
pub mod dto;
pub mod encode;
pub mod error;
pub mod lookup;

pub use client::InventoryClient;
pub use config::{ConfigError, InventoryConfig};
pub use error::LookupError;
pub use lookup::{InMemoryInventory, InventoryLookup};

pub use storefront_core::{InventoryResult, ProductId};
