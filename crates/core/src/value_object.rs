//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own; two with the same attribute
/// values are the same thing. Nested records such as [`crate::Address`] are
/// value objects owned by the entity that lists them. List-valued fields of
/// value objects get [`crate::Field::items`] and [`crate::Field::insert_unique`].
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
