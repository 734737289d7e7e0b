//! Constants for GF(2^359) with reduction pentanomial
//! f(x) = x^359 + x^18 + x^4 + x^2 + 1

/// Extension degree m of the field
pub const GF2_359_DEGREE: usize = 359;

/// Size of a 64-bit machine word in bits
pub const GF2_359_WORD_BITS: usize = 64;

/// Number of 64-bit words holding a reduced element (384 bits, 359 used)
pub const GF2_359_WORDS: usize = 6;

/// Number of 64-bit words holding an unreduced product (degree <= 716)
pub const GF2_359_WIDE_WORDS: usize = 2 * GF2_359_WORDS;

/// Exponents of the low-degree terms of f(x).
///
/// x^359 = x^18 + x^4 + x^2 + 1 (mod f), so a coefficient at position k >= 359
/// folds onto positions k - 359 + offset for every offset listed here.
pub const GF2_359_REDUCTION_OFFSETS: [usize; 4] = [0, 2, 4, 18];

/// Mask of the bits of the top word that belong to the field (bits 320..358)
pub const GF2_359_TOP_WORD_MASK: u64 =
    (1u64 << (GF2_359_DEGREE - (GF2_359_WORDS - 1) * GF2_359_WORD_BITS)) - 1;

/// Size of a big-endian encoded field element in bytes (359 bits -> 45 bytes)
pub const GF2_359_FIELD_ELEMENT_SIZE: usize = (GF2_359_DEGREE + 7) / 8;

/// Number of hex digits in a full-width encoding (359 bits -> 90 digits)
pub const GF2_359_HEX_DIGITS: usize = (GF2_359_DEGREE + 3) / 4;
