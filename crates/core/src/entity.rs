//! Entity trait: identity + continuity across state changes.
//!
//! Catalog products and cart lines are entities: a cart line keeps the same
//! identity (its product id) while its quantity changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
