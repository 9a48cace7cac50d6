//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, and "changing" one means building a new one.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (an amount of 30.00 equals any other 30.00)
/// - **Entity**: has identity (two line items with the same text are still two rows)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Amount(f64);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount(30.0), Amount(30.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
