//! Exact and approximate pattern matching.

use crate::distance::within_distance;
use crate::sequence::Sequence;

/// Returns every start offset where `pattern` occurs exactly in `text`.
///
/// ```
/// use ori_core::matching::pattern_matching;
/// use ori_core::sequence::Sequence;
///
/// let pattern = Sequence::new("ATAT").unwrap();
/// let text = Sequence::new("GATATATGCATATACTT").unwrap();
/// assert_eq!(pattern_matching(&pattern, &text), vec![1, 3, 9]);
/// ```
pub fn pattern_matching(pattern: &Sequence, text: &Sequence) -> Vec<usize> {
    text.kmers(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern.bases())
        .map(|(i, _)| i)
        .collect()
}

/// Returns every start offset where a window of `text` is within Hamming
/// distance `d` of `pattern`.
pub fn approximate_pattern_matching(pattern: &Sequence, text: &Sequence, d: usize) -> Vec<usize> {
    text.kmers(pattern.len())
        .enumerate()
        .filter(|(_, window)| within_distance(pattern.as_bytes(), window.as_bytes(), d))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        Sequence::new(s).unwrap()
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert!(pattern_matching(&seq("ACGTA"), &seq("ACGT")).is_empty());
        assert!(approximate_pattern_matching(&seq("ACGTA"), &seq("ACGT"), 5).is_empty());
    }

    #[test]
    fn test_approximate() {
        let text = seq(
            "CGCCCGAATCCAGAACGCATTCCCATATTTCGGGACCACTGGCCTCCACGGTACGGACGTCAATCAAATGCCTAGCGGCTTGTGGTTTCTCCTACGCTCC",
        );
        assert_eq!(
            approximate_pattern_matching(&seq("ATTCTGGA"), &text, 3),
            vec![6, 7, 26, 27, 78]
        );
    }

    #[test]
    fn test_zero_distance_is_exact() {
        let text = seq("GATATATGCATATACTT");
        let pattern = seq("ATAT");
        assert_eq!(
            approximate_pattern_matching(&pattern, &text, 0),
            pattern_matching(&pattern, &text)
        );
    }
}
