//! Trait definitions shared across the gf359 crates

pub mod serialize;

pub use serialize::Serialize;
