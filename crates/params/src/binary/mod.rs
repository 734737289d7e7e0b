//! Constants for binary extension fields GF(2^m)

pub mod gf2_359;
