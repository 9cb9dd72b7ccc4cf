//! Runtime field introspection and property copying for record types.
//!
//! The [`reflect`] module carries the core: object-safe traits describing
//! any value and, for structured records, their declared fields, plus a
//! copier that transfers same-named identically-typed field values between
//! records. The [`latch`] module carries a one-shot initialization latch.

/// One-shot initialization latch.
pub mod latch;
/// Record introspection, property copying, and schema description.
pub mod reflect;
