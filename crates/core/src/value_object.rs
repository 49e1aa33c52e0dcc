//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attribute values are equal. To "modify" one, create
/// a new one with the new values.
///
/// - **Value Object**: no identity (`TaskStatus::Done == TaskStatus::Done`)
/// - **Entity**: has identity (two tasks with the same id are the same task)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
