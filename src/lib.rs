//! Solves batches of calculations on integers that are too large for any native type.
//!
//! The numbers themselves are [decint::BigInteger]s, this crate reads the challenge definitions,
//! dispatches the testcases and writes the responses.
pub mod challenge;
pub mod common;
pub mod settings;
