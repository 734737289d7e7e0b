//! Binary extension field arithmetic
//!
//! This crate implements arithmetic in GF(2^359), the binary field defined by
//! the irreducible pentanomial f(x) = x^359 + x^18 + x^4 + x^2 + 1. It is the
//! computational kernel for binary-curve and other GF(2^m) based primitives:
//! element representation, addition, carry-less multiplication with sparse
//! reduction, squaring, exponentiation, inversion, the trace, and the hex and
//! byte encodings.
//!
//! Elements are fixed-width value types; no operation allocates on the
//! arithmetic paths and every result is kept in canonical (reduced) form.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{Error, Result, validate};

// Binary field implementations
pub mod field;
pub use field::gf2_359::{ExponentBits, FieldElement as Gf2_359};
