//! Integration tests for the sequence codec.

use ori_core::codec::*;
use ori_core::limits::code_space;
use ori_core::{MotifError, Resource, Sequence};
use pretty_assertions::assert_eq;

#[test]
fn test_pattern_to_number() {
    assert_eq!(encode("AGT").unwrap(), 11);
    assert_eq!(encode("ATGCAA").unwrap(), 912);
}

#[test]
fn test_number_to_pattern() {
    assert_eq!(decode(45, 4).unwrap().bases(), "AGTC");
    assert_eq!(decode(5437, 7).unwrap().bases(), "CCCATTC");
    assert_eq!(decode(5437, 8).unwrap().bases(), "ACCCATTC");
}

#[test]
fn test_round_trip_every_code() {
    for k in 0..=6 {
        let space = code_space(k).unwrap() as u64;
        for code in 0..space {
            let pattern = decode(code, k).unwrap();
            assert_eq!(pattern.len(), k);
            assert_eq!(encode(pattern.bases()).unwrap(), code);
        }
    }
}

#[test]
fn test_round_trip_long_patterns() {
    let patterns = [
        "ACGTACGTACGTACGTACGTACGTACGTACGT",
        "TTTTTTTTTTTTTTTTTTTTTTTTTTTTTTTG",
        "GATTACA",
    ];
    for pattern in patterns {
        let seq = Sequence::new(pattern).unwrap();
        let code = encode_sequence(&seq).unwrap();
        assert_eq!(decode(code, seq.len()).unwrap(), seq);
    }
}

#[test]
fn test_lexicographic_order() {
    let mut previous = None;
    for code in 0..64u64 {
        let pattern = decode(code, 3).unwrap().into_string();
        if let Some(prev) = previous {
            assert!(prev < pattern);
        }
        previous = Some(pattern);
    }
}

#[test]
fn test_invalid_symbol() {
    assert_eq!(
        encode("ACGU"),
        Err(MotifError::InvalidSymbol { symbol: 'U', position: 3 })
    );
}

#[test]
fn test_out_of_range() {
    assert_eq!(decode(256, 4), Err(MotifError::OutOfRange { code: 256, k: 4 }));
    assert_eq!(decode_signed(-7, 4), Err(MotifError::OutOfRange { code: -7, k: 4 }));
    assert_eq!(decode_signed(255, 4).unwrap().bases(), "TTTT");
}

#[test]
fn test_k_beyond_code_width() {
    assert!(matches!(
        decode(0, MAX_K + 1),
        Err(MotifError::ResourceLimitExceeded { resource: Resource::CodeSpace, .. })
    ));
}

#[test]
fn test_symbols_checked_before_length() {
    let long = "X".repeat(MAX_K + 1);
    assert_eq!(
        encode(&long),
        Err(MotifError::InvalidSymbol { symbol: 'X', position: 0 })
    );

    let mut tail = "A".repeat(MAX_K + 4);
    tail.push('u');
    assert_eq!(
        encode(&tail),
        Err(MotifError::InvalidSymbol { symbol: 'u', position: MAX_K + 4 })
    );

    // 17 two-byte symbols are 34 bytes but only 17 characters.
    let accented = "é".repeat(17);
    assert_eq!(
        encode(&accented),
        Err(MotifError::InvalidSymbol { symbol: 'é', position: 0 })
    );

    assert!(matches!(
        encode(&"a".repeat(MAX_K + 1)),
        Err(MotifError::ResourceLimitExceeded { resource: Resource::CodeSpace, .. })
    ));
}
