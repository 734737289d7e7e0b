//! Multiplicative inversion by the extended Euclidean algorithm over GF(2)[x]

use super::arith::clmul_into;
use super::{words_degree, FieldElement};
use crate::error::{Error, Result};
use gf359_params::binary::gf2_359::{
    GF2_359_DEGREE, GF2_359_REDUCTION_OFFSETS, GF2_359_WIDE_WORDS, GF2_359_WORDS,
    GF2_359_WORD_BITS,
};
use tracing::{debug, trace};

/// Unreduced polynomial of degree <= 383.
///
/// Unlike `FieldElement` it may hold x^359, which the modulus f(x) needs. Every
/// polynomial in the inversion loop has degree <= 359.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Poly([u64; GF2_359_WORDS]);

impl Poly {
    const ZERO: Self = Poly([0u64; GF2_359_WORDS]);

    const ONE: Self = {
        let mut words = [0u64; GF2_359_WORDS];
        words[0] = 1;
        Poly(words)
    };

    /// f(x) = x^359 + x^18 + x^4 + x^2 + 1
    fn modulus() -> Self {
        let mut f = Self::ZERO;
        f.flip(GF2_359_DEGREE);
        for offset in GF2_359_REDUCTION_OFFSETS {
            f.flip(offset);
        }
        f
    }

    fn degree(&self) -> Option<usize> {
        words_degree(&self.0)
    }

    #[inline(always)]
    fn flip(&mut self, pos: usize) {
        self.0[pos / GF2_359_WORD_BITS] ^= 1u64 << (pos % GF2_359_WORD_BITS);
    }

    fn xor(&self, other: &Self) -> Self {
        let mut out = *self;
        for (lhs, rhs) in out.0.iter_mut().zip(other.0.iter()) {
            *lhs ^= *rhs;
        }
        out
    }

    /// self * x^s, truncated to 384 bits
    fn shl(&self, s: usize) -> Self {
        let words = s / GF2_359_WORD_BITS;
        let bits = s % GF2_359_WORD_BITS;
        let mut out = Self::ZERO;
        for i in (words..GF2_359_WORDS).rev() {
            let src = i - words;
            out.0[i] = self.0[src] << bits;
            if bits != 0 && src > 0 {
                out.0[i] |= self.0[src - 1] >> (GF2_359_WORD_BITS - bits);
            }
        }
        out
    }

    /// Long division: returns (q, r) with self = q * divisor + r and
    /// deg r < deg divisor. `divisor` must be non-zero.
    fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let mut quotient = Self::ZERO;
        let mut remainder = *self;
        let Some(dd) = divisor.degree() else {
            return (quotient, remainder);
        };

        while let Some(dr) = remainder.degree() {
            if dr < dd {
                break;
            }
            let shift = dr - dd;
            remainder = remainder.xor(&divisor.shl(shift));
            quotient.flip(shift);
        }
        (quotient, remainder)
    }

    /// Product in GF(2)[x]; the caller guarantees the degree stays below 384.
    fn mul(&self, other: &Self) -> Self {
        let mut acc = [0u64; GF2_359_WIDE_WORDS];
        clmul_into(&self.0, &other.0, &mut acc);
        debug_assert!(acc[GF2_359_WORDS..].iter().all(|&w| w == 0));

        let mut out = Self::ZERO;
        out.0.copy_from_slice(&acc[..GF2_359_WORDS]);
        out
    }
}

impl FieldElement {
    /// Multiplicative inverse.
    ///
    /// Runs the extended Euclidean algorithm on (f, a). The loop keeps the
    /// invariant t_i * a = r_i (mod f); once the remainder r1 reaches the
    /// constant 1, t1 is the inverse. Cofactor degrees stay below 359, so no
    /// final reduction is needed.
    ///
    /// Returns `Error::InverseOfZero` for the zero element.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            debug!("rejected inversion of the zero element");
            return Err(Error::InverseOfZero {
                context: "GF(2^359) inversion",
            });
        }

        let (mut r0, mut r1) = (Poly::modulus(), Poly(self.0));
        let (mut t0, mut t1) = (Poly::ZERO, Poly::ONE);
        let mut steps = 0usize;

        loop {
            match r1.degree() {
                Some(0) => break,
                Some(_) => {}
                // f is irreducible, so gcd(f, a) = 1 and r1 never hits zero first.
                None => {
                    return Err(Error::Processing {
                        operation: "GF(2^359) inversion",
                        details: "remainder sequence ended without a unit",
                    })
                }
            }

            let (q, r) = r0.div_rem(&r1);
            (r0, r1) = (r1, r);
            (t0, t1) = (t1, t0.xor(&q.mul(&t1)));
            steps += 1;
        }

        trace!(steps = steps, "extended euclid converged");
        Ok(FieldElement::from_words(t1.0))
    }

    /// Field division: self * other^-1.
    ///
    /// Returns `Error::InverseOfZero` when `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self> {
        Ok(self.mul(&other.invert()?))
    }
}
