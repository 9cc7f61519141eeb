//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two `Money`
/// amounts with the same figure are the same money, regardless of where they
/// live. To "modify" one, construct a new one. Immutability is what makes the
/// pricing model freely shareable (see the `Arc` usage in the product tree).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
