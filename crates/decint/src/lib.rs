//! Easy decimal big integers
//!
//! Sometimes a number just does not fit into any of the native integer types, and all that is
//! needed is a bit of adding, subtracting and multiplying. This crate implements a signed integer
//! of arbitrary size that keeps its value as plain decimal digits, so parsing and printing are
//! trivial and every step of the arithmetic can be followed by hand.
//!
//! The aim of this library is to be simple to use and understand, not to be fast. If you need
//! speed, use a real bignum library.
//!
//! ```
//! use decint::BigInteger;
//!
//! let a: BigInteger = "999".parse().unwrap();
//! let b = BigInteger::ONE;
//! assert_eq!((a + b).to_string(), "1000");
//! ```

/// Implements [BigInteger].
pub mod bigint;
/// The [Error] type of this crate.
pub mod error;

#[cfg(test)]
mod proptests;

pub use bigint::{BigInteger, Digit};
pub use error::{Error, Result};
