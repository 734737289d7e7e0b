//! Carry-less multiplication, squaring and the pentanomial reduction sweep

use super::{words_degree, FieldElement};
use gf359_params::binary::gf2_359::{
    GF2_359_DEGREE, GF2_359_REDUCTION_OFFSETS, GF2_359_TOP_WORD_MASK, GF2_359_WIDE_WORDS,
    GF2_359_WORDS, GF2_359_WORD_BITS,
};

/// XOR the carry-less product `a * b` into `acc`.
///
/// Only the set bits of `a` and the non-zero words of `b` are visited.
/// `acc` must hold at least `a.len() + b.len()` words.
pub(crate) fn clmul_into(a: &[u64], b: &[u64], acc: &mut [u64]) {
    debug_assert!(acc.len() >= a.len() + b.len());
    for (i, &aw) in a.iter().enumerate() {
        let mut bits = aw;
        while bits != 0 {
            let shift = bits.trailing_zeros() as usize;
            bits &= bits - 1;

            for (j, &bw) in b.iter().enumerate() {
                if bw == 0 {
                    continue;
                }
                acc[i + j] ^= bw << shift;
                if shift != 0 {
                    acc[i + j + 1] ^= bw >> (GF2_359_WORD_BITS - shift);
                }
            }
        }
    }
}

#[inline(always)]
fn flip_bit(words: &mut [u64], pos: usize) {
    words[pos / GF2_359_WORD_BITS] ^= 1u64 << (pos % GF2_359_WORD_BITS);
}

/// Reduce an arbitrary-length polynomial modulo f(x) in place.
///
/// Coefficients at k >= 359 are cleared from the highest position downward;
/// each one is replaced by x^(k-359) * (x^18 + x^4 + x^2 + 1). Folded bits can
/// still sit at or above 359 (up to k - 341), and the descending scan picks
/// them up again. On return every bit at position >= 359 is clear.
pub(crate) fn reduce_wide(acc: &mut [u64]) {
    let top = GF2_359_WORDS - 1;
    if acc.len() <= top {
        return;
    }

    for w in (top..acc.len()).rev() {
        loop {
            let overflow = if w == top {
                acc[w] & !GF2_359_TOP_WORD_MASK
            } else {
                acc[w]
            };
            if overflow == 0 {
                break;
            }

            let bit = GF2_359_WORD_BITS - 1 - overflow.leading_zeros() as usize;
            let k = w * GF2_359_WORD_BITS + bit;
            acc[w] ^= 1u64 << bit;

            let base = k - GF2_359_DEGREE;
            for offset in GF2_359_REDUCTION_OFFSETS {
                flip_bit(acc, base + offset);
            }
        }
    }

    debug_assert!(words_degree(acc).map_or(true, |d| d < GF2_359_DEGREE));
}

/// Spread the 32 bits of `x` over the even bit positions of a u64.
#[inline(always)]
fn spread_bits(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

impl FieldElement {
    /// Canonical element from a reduced wide accumulator
    #[inline(always)]
    fn from_reduced(acc: &[u64; GF2_359_WIDE_WORDS]) -> Self {
        let mut words = [0u64; GF2_359_WORDS];
        words.copy_from_slice(&acc[..GF2_359_WORDS]);
        Self::from_words(words)
    }

    /// Field multiplication
    pub fn mul(&self, other: &Self) -> Self {
        let mut acc = [0u64; GF2_359_WIDE_WORDS];
        clmul_into(&self.0, &other.0, &mut acc);
        reduce_wide(&mut acc);
        Self::from_reduced(&acc)
    }

    /// Field squaring.
    ///
    /// In characteristic 2, (sum a_i x^i)^2 = sum a_i x^2i, so the unreduced
    /// square is the bit-spread of the input.
    pub fn square(&self) -> Self {
        let mut acc = [0u64; GF2_359_WIDE_WORDS];
        for (i, &w) in self.0.iter().enumerate() {
            acc[2 * i] = spread_bits(w as u32);
            acc[2 * i + 1] = spread_bits((w >> 32) as u32);
        }
        reduce_wide(&mut acc);
        Self::from_reduced(&acc)
    }

    /// Square `n` times: self^(2^n)
    pub fn square_n(&self, n: usize) -> Self {
        let mut out = *self;
        for _ in 0..n {
            out = out.square();
        }
        out
    }
}
