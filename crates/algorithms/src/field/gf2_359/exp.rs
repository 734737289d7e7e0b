//! Exponentiation and the Frobenius-derived maps (trace, square root, half-trace)

use super::FieldElement;
use gf359_params::binary::gf2_359::{GF2_359_DEGREE, GF2_359_WORD_BITS};

/// An exponent that can be scanned bit by bit.
///
/// One square-and-multiply routine serves every exponent type; implementors
/// only describe where their bits are.
pub trait ExponentBits {
    /// Number of significant bits: index of the highest set bit plus one, 0 for zero
    fn bit_len(&self) -> usize;

    /// Bit `i` of the exponent, counting from the least significant bit
    fn bit(&self, i: usize) -> bool;
}

impl ExponentBits for u64 {
    fn bit_len(&self) -> usize {
        (u64::BITS - self.leading_zeros()) as usize
    }

    fn bit(&self, i: usize) -> bool {
        i < u64::BITS as usize && (self >> i) & 1 == 1
    }
}

impl ExponentBits for u128 {
    fn bit_len(&self) -> usize {
        (u128::BITS - self.leading_zeros()) as usize
    }

    fn bit(&self, i: usize) -> bool {
        i < u128::BITS as usize && (self >> i) & 1 == 1
    }
}

/// Little-endian words of an arbitrarily large exponent
impl ExponentBits for [u64] {
    fn bit_len(&self) -> usize {
        match self.iter().rposition(|&w| w != 0) {
            Some(i) => i * GF2_359_WORD_BITS + self[i].bit_len(),
            None => 0,
        }
    }

    fn bit(&self, i: usize) -> bool {
        self.get(i / GF2_359_WORD_BITS)
            .map_or(false, |w| (w >> (i % GF2_359_WORD_BITS)) & 1 == 1)
    }
}

/// A field element read as the bit string of its coefficients
impl ExponentBits for FieldElement {
    fn bit_len(&self) -> usize {
        self.degree().map_or(0, |d| d + 1)
    }

    fn bit(&self, i: usize) -> bool {
        FieldElement::bit(self, i)
    }
}

impl FieldElement {
    /// Left-to-right square-and-multiply over any exponent.
    ///
    /// `pow_by(&0)` is one for every base, zero included.
    pub fn pow_by<E: ExponentBits + ?Sized>(&self, exponent: &E) -> Self {
        let mut result = Self::ONE;
        for i in (0..exponent.bit_len()).rev() {
            result = result.square();
            if exponent.bit(i) {
                result = result.mul(self);
            }
        }
        result
    }

    /// self^e for a machine-word exponent
    pub fn pow(&self, e: u64) -> Self {
        self.pow_by(&e)
    }

    /// self^e where the coefficient vector of `e` is the exponent's bit string
    pub fn pow_field(&self, e: &FieldElement) -> Self {
        self.pow_by(e)
    }

    /// self^e for a little-endian multi-word exponent
    pub fn pow_words(&self, e: &[u64]) -> Self {
        self.pow_by(e)
    }

    /// Absolute trace Tr(a) = a + a^2 + a^4 + ... + a^(2^358), as 0 or 1.
    pub fn trace(&self) -> u8 {
        let mut conjugate = *self;
        let mut sum = *self;
        for _ in 1..GF2_359_DEGREE {
            conjugate = conjugate.square();
            sum.add_in_place(&conjugate);
        }
        // The trace lies in GF(2): sum is 0 or 1.
        debug_assert!(sum.degree().map_or(true, |d| d == 0));
        (sum.0[0] & 1) as u8
    }

    /// The unique square root, a^(2^358).
    pub fn sqrt(&self) -> Self {
        self.square_n(GF2_359_DEGREE - 1)
    }

    /// Half-trace H(a) = sum_{i=0}^{179} a^(2^(2i)).
    ///
    /// m is odd, so whenever Tr(a) = 0 the result h satisfies h^2 + h = a.
    pub fn half_trace(&self) -> Self {
        let mut acc = *self;
        let mut t = *self;
        for _ in 0..(GF2_359_DEGREE - 1) / 2 {
            t = t.square().square();
            acc.add_in_place(&t);
        }
        acc
    }

    /// Solve z^2 + z = self.
    ///
    /// Returns `None` when Tr(self) = 1 (no solution exists). Otherwise the
    /// two solutions are the returned z and z + 1.
    pub fn solve_quadratic(&self) -> Option<Self> {
        if self.trace() != 0 {
            return None;
        }
        Some(self.half_trace())
    }
}
