//! Entity trait: identity + continuity across edits.

/// Entity marker + minimal interface.
///
/// A line item keeps its identity while its description, quantity and price
/// change; two items with equal text are still different rows.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
