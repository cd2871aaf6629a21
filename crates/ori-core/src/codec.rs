//! Bijection between k-mers and integers in `[0, 4^k)`.
//!
//! A pattern is read as a base-4 numeral, most significant symbol first,
//! with A=0, C=1, G=2, T=3. Codes are `u64`, which bounds k at [`MAX_K`].

use crate::error::{MotifError, MotifResult, Resource};
use crate::limits::code_space;
use crate::sequence::{Sequence, ALPHABET};

/// The longest pattern whose code fits in a `u64`.
pub const MAX_K: usize = 32;

/// Digit value of an uppercase base.
#[inline]
pub(crate) fn symbol_value(base: u8) -> Option<u64> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

fn check_k(k: usize) -> MotifResult<()> {
    if k > MAX_K {
        return Err(MotifError::ResourceLimitExceeded {
            resource: Resource::CodeSpace,
            requested: code_space(k).unwrap_or(u128::MAX),
            limit: code_space(MAX_K).unwrap_or(u128::MAX),
        });
    }
    Ok(())
}

/// Encodes bytes already known to be uppercase ACGT, at most [`MAX_K`] long.
#[inline]
pub(crate) fn encode_bytes(pattern: &[u8]) -> u64 {
    pattern
        .iter()
        .fold(0u64, |code, &b| (code << 2) | symbol_value(b).unwrap_or(0))
}

/// Encodes a pattern as its base-4 integer.
///
/// Lowercase symbols are accepted. Anything outside the alphabet fails with
/// [`MotifError::InvalidSymbol`], which takes precedence over the length
/// check.
///
/// ```
/// use ori_core::codec::encode;
///
/// assert_eq!(encode("AGT").unwrap(), 11);
/// ```
pub fn encode(pattern: &str) -> MotifResult<u64> {
    let mut code = 0u64;
    let mut k = 0;
    for (position, symbol) in pattern.chars().enumerate() {
        let value = u8::try_from(symbol.to_ascii_uppercase())
            .ok()
            .and_then(symbol_value)
            .ok_or(MotifError::InvalidSymbol { symbol, position })?;
        code = (code << 2) | value;
        k += 1;
    }
    check_k(k)?;
    Ok(code)
}

/// Encodes a validated sequence.
pub fn encode_sequence(pattern: &Sequence) -> MotifResult<u64> {
    check_k(pattern.len())?;
    Ok(encode_bytes(pattern.as_bytes()))
}

/// Decodes `code` into a pattern of exactly `k` symbols, left-padded with `A`.
///
/// ```
/// use ori_core::codec::decode;
///
/// assert_eq!(decode(45, 4).unwrap().bases(), "AGTC");
/// assert_eq!(decode(2, 3).unwrap().bases(), "AAG");
/// assert!(decode(64, 3).is_err());
/// ```
pub fn decode(code: u64, k: usize) -> MotifResult<Sequence> {
    check_k(k)?;
    if k < MAX_K && code >> (2 * k) != 0 {
        return Err(MotifError::OutOfRange {
            code: i128::from(code),
            k,
        });
    }
    Ok(decode_unchecked(code, k))
}

/// Decodes a possibly negative code, as read from untrusted input.
pub fn decode_signed(code: i64, k: usize) -> MotifResult<Sequence> {
    let unsigned = u64::try_from(code).map_err(|_| MotifError::OutOfRange {
        code: i128::from(code),
        k,
    })?;
    decode(unsigned, k)
}

pub(crate) fn decode_unchecked(mut code: u64, k: usize) -> Sequence {
    let mut bases = vec![b'A'; k];
    for slot in bases.iter_mut().rev() {
        *slot = ALPHABET[(code & 0b11) as usize];
        code >>= 2;
    }
    Sequence::from_validated(bases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("").unwrap(), 0);
        assert_eq!(encode("A").unwrap(), 0);
        assert_eq!(encode("T").unwrap(), 3);
        assert_eq!(encode("AGT").unwrap(), 11);
        assert_eq!(encode("agt").unwrap(), 11);
        assert_eq!(encode("TTTT").unwrap(), 255);
    }

    #[test]
    fn test_encode_invalid() {
        assert_eq!(
            encode("ACXG"),
            Err(MotifError::InvalidSymbol { symbol: 'X', position: 2 })
        );
    }

    #[test]
    fn test_encode_too_long() {
        let long = "A".repeat(MAX_K + 1);
        assert!(matches!(
            encode(&long),
            Err(MotifError::ResourceLimitExceeded { resource: Resource::CodeSpace, .. })
        ));
        assert_eq!(encode(&"T".repeat(MAX_K)).unwrap(), u64::MAX);
    }

    #[test]
    fn test_decode_padding() {
        assert_eq!(decode(0, 3).unwrap().bases(), "AAA");
        assert_eq!(decode(5437, 7).unwrap().bases(), "CCCATTC");
        assert_eq!(decode(0, 0).unwrap().bases(), "");
    }

    #[test]
    fn test_decode_out_of_range() {
        assert_eq!(decode(16, 2), Err(MotifError::OutOfRange { code: 16, k: 2 }));
        assert_eq!(decode(1, 0), Err(MotifError::OutOfRange { code: 1, k: 0 }));
        assert_eq!(decode_signed(-1, 2), Err(MotifError::OutOfRange { code: -1, k: 2 }));
        assert_eq!(decode(u64::MAX, MAX_K).unwrap().bases(), "T".repeat(MAX_K));
    }

    #[test]
    fn test_round_trip_all_4mers() {
        for code in 0..256u64 {
            let pattern = decode(code, 4).unwrap();
            assert_eq!(encode(pattern.bases()).unwrap(), code);
            assert_eq!(encode_sequence(&pattern).unwrap(), code);
        }
    }
}
