//! The lookup seam callers depend on, plus an in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use storefront_core::{InventoryResult, ProductId};

/// Resolve how many units of a product are available.
///
/// Implementations never fail: anything that prevents an answer becomes
/// [`InventoryResult::Unavailable`]. Calls are independent of each other and
/// may run concurrently.
#[async_trait::async_trait]
pub trait InventoryLookup: Send + Sync {
    async fn lookup_inventory(&self, product: &ProductId) -> InventoryResult;
}

#[async_trait::async_trait]
impl<T> InventoryLookup for Arc<T>
where
    T: InventoryLookup + ?Sized,
{
    async fn lookup_inventory(&self, product: &ProductId) -> InventoryResult {
        (**self).lookup_inventory(product).await
    }
}

/// Fixed stock table. Products not in the table are `Unavailable`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    units: HashMap<ProductId, u64>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, product: impl Into<ProductId>, units: u64) -> Self {
        self.set_units(product, units);
        self
    }

    pub fn set_units(&mut self, product: impl Into<ProductId>, units: u64) {
        self.units.insert(product.into(), units);
    }

    pub fn remove(&mut self, product: &ProductId) -> Option<u64> {
        self.units.remove(product)
    }
}

#[async_trait::async_trait]
impl InventoryLookup for InMemoryInventory {
    async fn lookup_inventory(&self, product: &ProductId) -> InventoryResult {
        self.units.get(product).copied().into()
    }
}
