//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances holding the same attribute
/// values are equal. They are immutable; to "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Slug(String);
///
/// impl ValueObject for Slug {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
