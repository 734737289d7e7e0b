//! GF(2^359) field arithmetic
//!
//! Elements are polynomials of degree < 359 over GF(2), reduced modulo the
//! irreducible pentanomial f(x) = x^359 + x^18 + x^4 + x^2 + 1.
//!
//! * Six little-endian 64-bit words: bit `i` of word `i / 64` is the
//!   coefficient of x^i. Only bits 0..=358 are ever set; the top word is
//!   masked to its low 39 bits after every operation.
//! * Addition is word-wise XOR. Multiplication is a carry-less shift-and-XOR
//!   product into a 12-word accumulator followed by a high-to-low sweep that
//!   folds every coefficient at position k >= 359 onto
//!   k - 359 + {0, 2, 4, 18}.
//! * Squaring spreads bit i to bit 2i (the Frobenius map has no cross terms)
//!   and reuses the same sweep.
//! * Inversion runs the extended Euclidean algorithm over GF(2)[x].
//!
//! Elements are `Copy` value types. Nothing here is constant-time.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use gf359_params::binary::gf2_359::{
    GF2_359_DEGREE, GF2_359_TOP_WORD_MASK, GF2_359_WORDS, GF2_359_WORD_BITS,
};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

mod arith;
mod encoding;
mod exp;
mod inv;

pub use exp::ExponentBits;

/// An element of GF(2^359).
///
/// The words are always canonical: no coefficient at position >= 359 is set,
/// so bitwise equality of the words is field equality.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldElement(pub(crate) [u64; GF2_359_WORDS]);

impl zeroize::DefaultIsZeroes for FieldElement {}

/// Position of the highest set bit of a little-endian word slice.
pub(crate) fn words_degree(words: &[u64]) -> Option<usize> {
    words
        .iter()
        .rposition(|&w| w != 0)
        .map(|i| i * GF2_359_WORD_BITS + (GF2_359_WORD_BITS - 1 - words[i].leading_zeros() as usize))
}

/* ========================================================================== */
/*  Constants & constructors                                                  */
/* ========================================================================== */

impl FieldElement {
    /// Extension degree m = 359
    pub const DEGREE: usize = GF2_359_DEGREE;

    /// The additive identity element: 0
    pub const ZERO: Self = FieldElement([0u64; GF2_359_WORDS]);

    /// The multiplicative identity element: 1
    pub const ONE: Self = {
        let mut words = [0u64; GF2_359_WORDS];
        words[0] = 1;
        FieldElement(words)
    };

    /// The additive identity element: 0
    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// The multiplicative identity element: 1
    #[inline]
    pub fn one() -> Self {
        Self::ONE
    }

    /// The polynomial whose coefficients are the bits of `value`
    pub fn from_u64(value: u64) -> Self {
        let mut words = [0u64; GF2_359_WORDS];
        words[0] = value;
        FieldElement(words)
    }

    /// Build an element from little-endian words.
    ///
    /// Bits at positions >= 359 are discarded, not reduced.
    pub fn from_words(mut words: [u64; GF2_359_WORDS]) -> Self {
        words[GF2_359_WORDS - 1] &= GF2_359_TOP_WORD_MASK;
        FieldElement(words)
    }

    /// The little-endian word representation
    pub fn to_words(&self) -> [u64; GF2_359_WORDS] {
        self.0
    }

    /// Sample a uniformly distributed element
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut words = [0u64; GF2_359_WORDS];
        for word in words.iter_mut() {
            *word = rng.next_u64();
        }
        Self::from_words(words)
    }
}

/* ========================================================================== */
/*  Bit-vector layer                                                          */
/* ========================================================================== */

impl FieldElement {
    /// Check if the field element represents zero
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Check if the field element is the multiplicative identity
    #[inline(always)]
    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// Degree of the polynomial, `None` for zero
    pub fn degree(&self) -> Option<usize> {
        words_degree(&self.0)
    }

    /// Coefficient of x^i; `false` for every i >= 359
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        i < GF2_359_DEGREE && (self.0[i / GF2_359_WORD_BITS] >> (i % GF2_359_WORD_BITS)) & 1 == 1
    }

    /// Set the coefficient of x^i. Positions >= 359 are ignored.
    pub fn set_bit(&mut self, i: usize, value: bool) {
        if i >= GF2_359_DEGREE {
            return;
        }
        let mask = 1u64 << (i % GF2_359_WORD_BITS);
        if value {
            self.0[i / GF2_359_WORD_BITS] |= mask;
        } else {
            self.0[i / GF2_359_WORD_BITS] &= !mask;
        }
    }
}

/* ========================================================================== */
/*  Addition                                                                  */
/* ========================================================================== */

impl FieldElement {
    /// Field addition (XOR of the coefficient vectors)
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = *self;
        out.add_in_place(other);
        out
    }

    /// In-place field addition: `self = self + other`
    #[inline]
    pub fn add_in_place(&mut self, other: &Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(other.0.iter()) {
            *lhs ^= *rhs;
        }
    }
}

/* ========================================================================== */
/*  Trait impls                                                               */
/* ========================================================================== */

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{})", self.to_hex())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; GF2_359_WORDS];
        for (i, word) in out.iter_mut().enumerate() {
            *word = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(out)
    }
}

// Every element is its own additive inverse.
impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        self
    }
}

impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        *self
    }
}

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    #[inline]
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement::add(self, rhs)
    }
}

impl<'b> Add<&'b FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement::add(&self, rhs)
    }
}

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn add(self, rhs: FieldElement) -> FieldElement {
        FieldElement::add(&self, &rhs)
    }
}

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    #[inline]
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement::add(self, rhs)
    }
}

impl<'b> Sub<&'b FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement::add(&self, rhs)
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn sub(self, rhs: FieldElement) -> FieldElement {
        FieldElement::add(&self, &rhs)
    }
}

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    #[inline]
    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement::mul(self, rhs)
    }
}

impl<'b> Mul<&'b FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement::mul(&self, rhs)
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn mul(self, rhs: FieldElement) -> FieldElement {
        FieldElement::mul(&self, &rhs)
    }
}

impl<'b> AddAssign<&'b FieldElement> for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: &'b FieldElement) {
        self.add_in_place(rhs);
    }
}

impl AddAssign<FieldElement> for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: FieldElement) {
        self.add_in_place(&rhs);
    }
}

impl<'b> SubAssign<&'b FieldElement> for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b FieldElement) {
        self.add_in_place(rhs);
    }
}

impl SubAssign<FieldElement> for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: FieldElement) {
        self.add_in_place(&rhs);
    }
}

impl<'b> MulAssign<&'b FieldElement> for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b FieldElement) {
        *self = FieldElement::mul(self, rhs);
    }
}

impl MulAssign<FieldElement> for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::mul(self, &rhs);
    }
}
