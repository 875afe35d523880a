//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two value
/// objects with the same attribute values are equal. To "modify" one,
/// build a new one with the new values.
///
/// The trait bounds keep value objects cheap to copy (`Clone`), comparable
/// by their attributes (`PartialEq`), and debuggable (`Debug`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
