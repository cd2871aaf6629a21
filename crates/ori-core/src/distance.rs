//! Hamming distance.

use crate::error::{MotifError, MotifResult};
use crate::sequence::Sequence;

/// Counts differing positions of two equal-length byte strings.
#[inline]
pub(crate) fn mismatches(p: &[u8], q: &[u8]) -> usize {
    p.iter().zip(q).filter(|(a, b)| a != b).count()
}

/// Like [`mismatches`], but stops counting once `limit` is exceeded.
#[inline]
pub(crate) fn within_distance(p: &[u8], q: &[u8], limit: usize) -> bool {
    let mut seen = 0;
    for (a, b) in p.iter().zip(q) {
        if a != b {
            seen += 1;
            if seen > limit {
                return false;
            }
        }
    }
    true
}

/// Returns the number of positions at which `p` and `q` differ.
///
/// Fails with [`MotifError::LengthMismatch`] when the lengths differ.
///
/// ```
/// use ori_core::distance::hamming_distance;
/// use ori_core::sequence::Sequence;
///
/// let p = Sequence::new("GGGCCGTTGGT").unwrap();
/// let q = Sequence::new("GGACCGTTGAC").unwrap();
/// assert_eq!(hamming_distance(&p, &q).unwrap(), 3);
/// ```
pub fn hamming_distance(p: &Sequence, q: &Sequence) -> MotifResult<usize> {
    if p.len() != q.len() {
        return Err(MotifError::LengthMismatch {
            left: p.len(),
            right: q.len(),
        });
    }
    Ok(mismatches(p.as_bytes(), q.as_bytes()))
}
