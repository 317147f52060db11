//! Primitive aliases shared across the domain.

/// Monetary amounts are whole won.
pub type Money = i64;
