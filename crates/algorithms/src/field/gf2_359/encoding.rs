//! Hex and byte encodings of GF(2^359) elements

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use super::arith::reduce_wide;
use super::{words_degree, FieldElement};
use crate::error::{validate, Error, Result};
use gf359_api::ResultExt;
use gf359_params::binary::gf2_359::{GF2_359_DEGREE, GF2_359_FIELD_ELEMENT_SIZE, GF2_359_WORDS};
use tracing::debug;

const HEX_CONTEXT: &str = "GF(2^359) hex";
const BYTES_CONTEXT: &str = "FieldElement GF(2^359)";

/// Pack big-endian bytes into little-endian words.
fn be_bytes_to_words(bytes: &[u8], words: &mut [u64]) {
    for (j, &byte) in bytes.iter().rev().enumerate() {
        words[j / 8] |= (byte as u64) << (8 * (j % 8));
    }
}

impl FieldElement {
    /// Convert field element to big-endian byte representation
    pub fn to_bytes(&self) -> [u8; GF2_359_FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; GF2_359_FIELD_ELEMENT_SIZE];
        for (j, byte) in out.iter_mut().rev().enumerate() {
            *byte = (self.0[j / 8] >> (8 * (j % 8))) as u8;
        }
        out
    }

    /// Create a field element from big-endian byte representation.
    ///
    /// 45 bytes carry 360 bits; an encoding with bit 359 set is not canonical
    /// and is rejected.
    pub fn from_bytes(bytes: &[u8; GF2_359_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        validate::parameter(bytes[0] & 0x80 == 0, BYTES_CONTEXT, "encoding has bit 359 set")?;
        let mut words = [0u64; GF2_359_WORDS];
        be_bytes_to_words(bytes, &mut words);
        Ok(FieldElement(words))
    }

    /// Minimal lowercase hex, most significant digit first; "0" for zero.
    pub fn to_hex(&self) -> String {
        let full = hex::encode(self.to_bytes());
        match full.trim_start_matches('0') {
            "" => "0".to_string(),
            digits => digits.to_string(),
        }
    }

    /// Parse a hex string into a field element.
    ///
    /// Digits are case-insensitive and right-aligned (the last digit holds
    /// x^0..x^3); a leading `0x`/`0X` is accepted and the input may be of any
    /// length. Values of degree >= 359 are reduced modulo f(x).
    ///
    /// The empty string parses as zero. Non-hex characters, and a `0x` prefix
    /// with no digits after it, are rejected with `Error::MalformedInput`;
    /// nothing is silently dropped.
    pub fn from_hex(s: &str) -> Result<Self> {
        let (prefix, digits) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(rest) => (2, rest),
            None => (0, s),
        };

        if prefix != 0 && digits.is_empty() {
            return Err(Error::MalformedInput {
                context: HEX_CONTEXT,
                position: prefix,
                found: None,
            });
        }
        if let Some((index, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            debug!(position = prefix + index, "rejected non-hex character");
            return Err(Error::MalformedInput {
                context: HEX_CONTEXT,
                position: prefix + index,
                found: Some(c),
            });
        }

        // hex::decode wants whole bytes
        let mut padded = String::with_capacity(digits.len() + 1);
        if digits.len() % 2 == 1 {
            padded.push('0');
        }
        padded.push_str(digits);
        let bytes = hex::decode(&padded).map_err(|_| Error::Processing {
            operation: "GF(2^359) hex decoding",
            details: "validated digits failed to decode",
        })?;

        let mut wide = vec![0u64; ((bytes.len() + 7) / 8).max(GF2_359_WORDS)];
        be_bytes_to_words(&bytes, &mut wide);
        if let Some(degree) = words_degree(&wide).filter(|&d| d >= GF2_359_DEGREE) {
            debug!(degree = degree, "reducing over-degree hex input");
            reduce_wide(&mut wide);
        }

        let mut words = [0u64; GF2_359_WORDS];
        words.copy_from_slice(&wide[..GF2_359_WORDS]);
        Ok(Self::from_words(words))
    }
}

impl FromStr for FieldElement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex())
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex().to_ascii_uppercase())
    }
}

impl gf359_api::Serialize for FieldElement {
    fn from_bytes(bytes: &[u8]) -> gf359_api::Result<Self> {
        validate::length(BYTES_CONTEXT, bytes.len(), GF2_359_FIELD_ELEMENT_SIZE)?;
        let mut array = [0u8; GF2_359_FIELD_ELEMENT_SIZE];
        array.copy_from_slice(bytes);
        FieldElement::from_bytes(&array).with_context(BYTES_CONTEXT)
    }

    fn to_bytes(&self) -> Vec<u8> {
        FieldElement::to_bytes(self).to_vec()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldElement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FieldElement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        FieldElement::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
