//! Constant values for the gf359 library
//!
//! Parameters of the binary extension fields implemented by the library,
//! kept apart from the arithmetic so that consumers (encoders, test harnesses)
//! can size buffers without pulling in the algorithms crate.

#![no_std]

pub mod binary;
