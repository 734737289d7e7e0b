//! # gf359
//!
//! Arithmetic in the binary extension field GF(2^359), reduced modulo the
//! irreducible pentanomial f(x) = x^359 + x^18 + x^4 + x^2 + 1.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gf359 = "0.3"
//! ```
//!
//! ```
//! use gf359::prelude::*;
//!
//! let a = FieldElement::from_hex("1f").unwrap();
//! let b = a.invert().unwrap();
//! assert_eq!(a * b, FieldElement::one());
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: hex-string `Serialize`/`Deserialize` for field elements
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`gf359-api`]: error type and the `Serialize` trait
//! - [`gf359-params`]: field constants
//! - [`gf359-algorithms`]: the field arithmetic itself

#![cfg_attr(not(feature = "std"), no_std)]

pub use gf359_algorithms as algorithms;
pub use gf359_api as api;
pub use gf359_params as params;

// Crates whose traits appear in the public API
#[cfg(feature = "rand")]
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for gf359 users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Core traits
    pub use crate::api::Serialize;
    pub use crate::algorithms::ExponentBits;

    // The field element itself
    pub use crate::algorithms::Gf2_359 as FieldElement;
}
