//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity keeps its identity while its attributes (quantity, location, ...)
/// change underneath it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
