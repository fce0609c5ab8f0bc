//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A `ProductId`
/// naming "Nebu Dino" is the same product wherever it was constructed, and an
/// `InventoryResult` of `Units(3)` is interchangeable with any other `Units(3)`.
///
/// The trait requires:
/// - **Clone**: values are passed around freely (e.g. into spawned lookups)
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: useful in logs and assertions
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
