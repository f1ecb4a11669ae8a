//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A purchase record
/// is a value object: once appended to a history it is never modified, and two
/// records with the same timestamp, price and weight are indistinguishable.
///
/// The trait requires:
/// - **Clone**: records are copied when histories are merged
/// - **PartialEq**: compared by attribute values
/// - **Debug**: helpful for logging, testing
///
/// It carries no methods and nothing is generic over it; implementing it only
/// records that a type has value semantics.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
