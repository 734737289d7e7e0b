//! Binary extension fields GF(2^m)
//!
//! Each field lives in its own module with a `FieldElement` type carrying the
//! full arithmetic surface. Only GF(2^359) is provided.

pub mod gf2_359;
