//! Validated DNA sequences.
//!
//! A [`Sequence`] only ever holds the uppercase symbols `A`, `C`, `G` and
//! `T`, so everything downstream can index bytes without re-checking.

use std::fmt;
use std::str::FromStr;

use crate::error::{MotifError, MotifResult};

/// The DNA alphabet in code order (A=0, C=1, G=2, T=3).
pub const ALPHABET: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Returns the Watson-Crick partner of an uppercase base.
#[inline]
pub(crate) fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        _ => b'C',
    }
}

/// An immutable sequence over {A, C, G, T}.
///
/// # Examples
///
/// ```
/// use ori_core::sequence::Sequence;
///
/// let seq = Sequence::new("acgtt").unwrap();
/// assert_eq!(seq.bases(), "ACGTT");
///
/// assert!(Sequence::new("ACNT").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sequence {
    bases: String,
}

impl Sequence {
    /// Creates a sequence, normalizing to uppercase.
    ///
    /// Fails with [`MotifError::InvalidSymbol`] on the first character that
    /// is not a nucleotide. The empty sequence is valid.
    pub fn new(bases: impl AsRef<str>) -> MotifResult<Self> {
        let raw = bases.as_ref();
        let mut normalized = String::with_capacity(raw.len());

        for (position, symbol) in raw.chars().enumerate() {
            let upper = symbol.to_ascii_uppercase();
            if !matches!(upper, 'A' | 'C' | 'G' | 'T') {
                return Err(MotifError::InvalidSymbol { symbol, position });
            }
            normalized.push(upper);
        }

        Ok(Self { bases: normalized })
    }

    /// Wraps bytes that are already known to be uppercase ACGT.
    pub(crate) fn from_validated(bases: Vec<u8>) -> Self {
        debug_assert!(bases.iter().all(|b| ALPHABET.contains(b)));
        // ACGT is ASCII, so the bytes are valid UTF-8.
        let bases = String::from_utf8(bases).unwrap_or_default();
        Self { bases }
    }

    /// Returns the bases as a string slice.
    #[inline]
    pub fn bases(&self) -> &str {
        &self.bases
    }

    /// Returns the bases as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.bases.as_bytes()
    }

    /// Consumes the sequence, returning the underlying string.
    pub fn into_string(self) -> String {
        self.bases
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Returns the k-mer starting at `start`, if it fits.
    pub fn kmer(&self, start: usize, k: usize) -> Option<&str> {
        self.bases.get(start..start.checked_add(k)?)
    }

    /// Iterates over every k-mer in order of start offset.
    ///
    /// Yields nothing when `k` is zero or longer than the sequence.
    pub fn kmers(&self, k: usize) -> impl Iterator<Item = &str> + '_ {
        let count = if k == 0 { 0 } else { kmer_count(self.len(), k) };
        (0..count).map(move |i| &self.bases[i..i + k])
    }

    /// Returns the window `[start, start + len)` as a new sequence.
    pub fn window(&self, start: usize, len: usize) -> Option<Self> {
        self.kmer(start, len).map(|w| Self { bases: w.to_string() })
    }

    /// Complements each base without reversing.
    ///
    /// ```
    /// use ori_core::sequence::Sequence;
    ///
    /// let seq = Sequence::new("ATGC").unwrap();
    /// assert_eq!(seq.complement().bases(), "TACG");
    /// ```
    pub fn complement(&self) -> Self {
        Self::from_validated(self.as_bytes().iter().map(|&b| complement_base(b)).collect())
    }

    /// Reverses the sequence, then complements each base.
    ///
    /// ```
    /// use ori_core::sequence::Sequence;
    ///
    /// let seq = Sequence::new("AAAACCCGGT").unwrap();
    /// assert_eq!(seq.reverse_complement().bases(), "ACCGGGTTTT");
    /// ```
    pub fn reverse_complement(&self) -> Self {
        Self::from_validated(self.as_bytes().iter().rev().map(|&b| complement_base(b)).collect())
    }
}

/// Number of k-mer start offsets in a text of length `len`.
#[inline]
pub(crate) fn kmer_count(len: usize, k: usize) -> usize {
    if k > len {
        0
    } else {
        len - k + 1
    }
}

/// Returns the reverse complement of a pattern.
pub fn reverse_complement(pattern: &Sequence) -> Sequence {
    pattern.reverse_complement()
}

/// Returns the complement of a pattern, keeping its orientation.
pub fn complement(pattern: &Sequence) -> Sequence {
    pattern.complement()
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bases)
    }
}

impl FromStr for Sequence {
    type Err = MotifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Sequence {
    type Error = MotifError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.bases
    }
}
