//! G/C skew along a genome.
//!
//! The skew at index i is the number of G minus the number of C among the
//! first i bases. Its minimum is a common hint for the replication origin.

use crate::sequence::Sequence;

/// Returns the skew at every index `0..=genome.len()`; index 0 is 0.
///
/// ```
/// use ori_core::sequence::Sequence;
/// use ori_core::skew::skew_array;
///
/// let genome = Sequence::new("CATGGGCATCGGCCATACGCC").unwrap();
/// assert_eq!(&skew_array(&genome)[..8], &[0, -1, -1, -1, 0, 1, 2, 1]);
/// ```
pub fn skew_array(genome: &Sequence) -> Vec<i64> {
    let mut skew = Vec::with_capacity(genome.len() + 1);
    skew.push(0i64);

    let mut current = 0i64;
    for &base in genome.as_bytes() {
        match base {
            b'G' => current += 1,
            b'C' => current -= 1,
            _ => {}
        }
        skew.push(current);
    }

    skew
}

/// Returns, in ascending order, every index where the skew is minimal.
pub fn minimum_skew_positions(genome: &Sequence) -> Vec<usize> {
    let skew = skew_array(genome);
    let Some(&minimum) = skew.iter().min() else {
        return Vec::new();
    };

    skew.iter()
        .enumerate()
        .filter(|(_, &value)| value == minimum)
        .map(|(i, _)| i)
        .collect()
}
