//! Public API traits and types for the gf359 library
//!
//! This crate provides the public API surface shared by the gf359 crates:
//! the error type every fallible operation reports through, the
//! `ResultExt` context helper, and the byte-serialization trait.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{serialize, Serialize};
