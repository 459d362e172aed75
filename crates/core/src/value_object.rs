//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// instances with the same values are the same value. `Rating` and
/// `CatalogQuery` are value objects, while a `CartLine` (keyed by product id)
/// is an entity.
///
/// To "modify" a value object, build a new one with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
