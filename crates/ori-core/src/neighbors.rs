//! Hamming neighborhoods.
//!
//! [`neighbors`] builds the d-neighborhood by recursing on the suffix of the
//! pattern: every suffix neighbor that still has mismatch budget left gets all
//! four symbols prepended, while one that has used the whole budget only gets
//! the pattern's own first symbol. Each string at distance ≤ d is therefore
//! produced exactly once, with no de-duplication pass.

use crate::distance::mismatches;
use crate::error::MotifResult;
use crate::limits::Limits;
use crate::sequence::{Sequence, ALPHABET};

/// Returns the pattern itself followed by every single-substitution variant.
///
/// The result has `1 + 3 * len` members.
pub fn immediate_neighbors(pattern: &Sequence) -> Vec<Sequence> {
    let bases = pattern.as_bytes();
    let mut neighborhood = Vec::with_capacity(1 + 3 * bases.len());
    neighborhood.push(pattern.clone());

    for (i, &symbol) in bases.iter().enumerate() {
        for &nucleotide in ALPHABET.iter().filter(|&&n| n != symbol) {
            let mut variant = bases.to_vec();
            variant[i] = nucleotide;
            neighborhood.push(Sequence::from_validated(variant));
        }
    }

    neighborhood
}

/// Returns every pattern within Hamming distance `d` of `pattern`.
///
/// Fails with `ResourceLimitExceeded` when the neighborhood would be larger
/// than `limits.max_neighborhood_size`.
///
/// ```
/// use ori_core::limits::Limits;
/// use ori_core::neighbors::neighbors;
/// use ori_core::sequence::Sequence;
///
/// let pattern = Sequence::new("ACG").unwrap();
/// let hood = neighbors(&pattern, 1, &Limits::default()).unwrap();
/// assert_eq!(hood.len(), 10);
/// ```
pub fn neighbors(pattern: &Sequence, d: usize, limits: &Limits) -> MotifResult<Vec<Sequence>> {
    limits.check_neighborhood(pattern.len(), d)?;
    Ok(neighbor_bytes(pattern.as_bytes(), d)
        .into_iter()
        .map(Sequence::from_validated)
        .collect())
}

/// Suffix-recursive neighborhood over raw uppercase bytes.
pub(crate) fn neighbor_bytes(pattern: &[u8], d: usize) -> Vec<Vec<u8>> {
    if d == 0 || pattern.is_empty() {
        return vec![pattern.to_vec()];
    }
    if pattern.len() == 1 {
        return ALPHABET.iter().map(|&n| vec![n]).collect();
    }

    let first = pattern[0];
    let suffix = &pattern[1..];
    let mut neighborhood = Vec::new();

    for text in neighbor_bytes(suffix, d) {
        if mismatches(suffix, &text) < d {
            for &nucleotide in &ALPHABET {
                let mut candidate = Vec::with_capacity(pattern.len());
                candidate.push(nucleotide);
                candidate.extend_from_slice(&text);
                neighborhood.push(candidate);
            }
        } else {
            let mut candidate = Vec::with_capacity(pattern.len());
            candidate.push(first);
            candidate.extend(text);
            neighborhood.push(candidate);
        }
    }

    neighborhood
}

/// Closed-form neighborhood size, Σ_{i=0..min(d,k)} C(k,i)·3^i.
///
/// Returns `None` on overflow.
pub fn neighborhood_size(k: usize, d: usize) -> Option<u128> {
    let k = u128::try_from(k).ok()?;
    let top = u128::try_from(d).ok()?.min(k);

    let mut total = 0u128;
    let mut binomial = 1u128;
    let mut power = 1u128;
    for i in 0..=top {
        if i > 0 {
            binomial = binomial.checked_mul(k - i + 1)? / i;
            power = power.checked_mul(3)?;
        }
        total = total.checked_add(binomial.checked_mul(power)?)?;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seq(s: &str) -> Sequence {
        Sequence::new(s).unwrap()
    }

    #[test]
    fn test_immediate_neighbors() {
        let hood = immediate_neighbors(&seq("ACG"));
        assert_eq!(hood.len(), 10);
        assert_eq!(hood[0], seq("ACG"));
        let unique: HashSet<_> = hood.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_neighbors_distance_zero() {
        let hood = neighbors(&seq("ACGT"), 0, &Limits::default()).unwrap();
        assert_eq!(hood, vec![seq("ACGT")]);
    }

    #[test]
    fn test_neighbors_acg() {
        let hood = neighbors(&seq("ACG"), 1, &Limits::default()).unwrap();
        let found: HashSet<_> = hood.iter().map(|s| s.bases().to_string()).collect();
        let expected: HashSet<_> = ["CCG", "TCG", "GCG", "AAG", "ATG", "AGG", "ACA", "ACC", "ACT", "ACG"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_single_symbol() {
        let hood = neighbors(&seq("G"), 2, &Limits::default()).unwrap();
        assert_eq!(hood.len(), 4);
    }

    #[test]
    fn test_neighborhood_size() {
        assert_eq!(neighborhood_size(3, 1), Some(10));
        assert_eq!(neighborhood_size(4, 0), Some(1));
        assert_eq!(neighborhood_size(2, 5), Some(16));
        assert_eq!(neighborhood_size(10, 2), Some(1 + 30 + 45 * 9));
        assert_eq!(neighborhood_size(0, 3), Some(1));
    }

    #[test]
    fn test_limit_rejected() {
        let limits = Limits {
            max_neighborhood_size: 9,
            ..Limits::default()
        };
        assert!(neighbors(&seq("ACG"), 1, &limits).is_err());
    }
}
