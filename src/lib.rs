//! Big Natural \
//! This crate provides:
//! - [`Natural`]: Immutable arbitrary-precision natural numbers, stored as decimal digits, with
//!   arithmetic, relational and bitwise operators.
//! - [`NaturalError`]: The failures those operations can report.
//!
//! Operator traits panic on failure, the way the primitive integer types do. The `try_*`
//! methods return the error instead.

mod natural;
mod natural_cache;
mod natural_constants;
mod natural_error;

pub use natural::Natural;
pub use natural_error::NaturalError;
