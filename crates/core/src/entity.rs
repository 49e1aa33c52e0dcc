//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are the sole mutators of their own fields: external code may only
/// read state or invoke the entity's operations.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
