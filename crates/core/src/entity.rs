//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products are entities keyed by name: two products with the same name in a
/// list are the same product, regardless of their purchase histories.
pub trait Entity {
    /// Entity identifier.
    type Id: ?Sized + Eq + core::hash::Hash + Ord + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
