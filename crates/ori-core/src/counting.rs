//! K-mer counting.
//!
//! Two table shapes are provided. [`FrequencyTable`] is sparse and keyed by
//! the observed patterns; [`FrequencyArray`] is dense over the whole code
//! space and indexed through the [`codec`](crate::codec). Both are built fresh
//! per query and yield the same counts for the same text.

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::codec::{decode_unchecked, encode_bytes};
use crate::distance::within_distance;
use crate::error::MotifResult;
use crate::limits::Limits;
use crate::neighbors::neighbor_bytes;
use crate::sequence::{kmer_count, Sequence};

/// Counts exact, possibly overlapping occurrences of `pattern` in `text`.
///
/// Returns 0 when the pattern is empty or longer than the text.
///
/// ```
/// use ori_core::counting::pattern_count;
/// use ori_core::sequence::Sequence;
///
/// let text = Sequence::new("GCGCG").unwrap();
/// let pattern = Sequence::new("GCG").unwrap();
/// assert_eq!(pattern_count(&text, &pattern), 2);
/// ```
pub fn pattern_count(text: &Sequence, pattern: &Sequence) -> usize {
    text.kmers(pattern.len())
        .filter(|window| *window == pattern.bases())
        .count()
}

/// Counts windows of `text` within Hamming distance `d` of `pattern`.
pub fn count_with_mismatches(pattern: &Sequence, text: &Sequence, d: usize) -> usize {
    text.kmers(pattern.len())
        .filter(|window| within_distance(pattern.as_bytes(), window.as_bytes(), d))
        .count()
}

/// A sparse k-mer count table keyed by pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    k: usize,
    counts: FxHashMap<String, usize>,
}

impl FrequencyTable {
    /// Creates an empty table for k-mers of length `k`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            counts: FxHashMap::default(),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Adds `by` to the count of `kmer`.
    pub fn add(&mut self, kmer: &str, by: usize) {
        if let Some(count) = self.counts.get_mut(kmer) {
            *count += by;
        } else {
            self.counts.insert(kmer.to_owned(), by);
        }
    }

    /// Returns the count for `kmer`, or 0 if it was never seen.
    pub fn get(&self, kmer: &str) -> usize {
        self.counts.get(kmer).copied().unwrap_or(0)
    }

    /// Number of distinct patterns with a recorded count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The largest count in the table, 0 when empty.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Folds another table into this one.
    ///
    /// # Panics
    ///
    /// Panics if the k values don't match.
    pub fn merge(&mut self, other: &FrequencyTable) {
        assert_eq!(self.k, other.k, "Cannot merge tables with different k values");

        for (kmer, &count) in &other.counts {
            self.add(kmer, count);
        }
    }

    /// Iterates over `(pattern, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(kmer, &count)| (kmer.as_str(), count))
    }

    /// All patterns whose count is at least `threshold`, sorted.
    pub fn at_least(&self, threshold: usize) -> Vec<String> {
        let mut patterns: Vec<_> = self
            .counts
            .iter()
            .filter(|(_, &count)| count >= threshold)
            .map(|(kmer, _)| kmer.clone())
            .collect();
        patterns.sort_unstable();
        patterns
    }

    /// All `(pattern, count)` pairs sorted by pattern.
    pub fn sorted(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(kmer, &count)| (kmer.clone(), count))
            .collect();
        entries.sort_unstable();
        entries
    }
}

/// A dense count vector over all 4^k codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyArray {
    k: usize,
    counts: Vec<usize>,
}

impl FrequencyArray {
    pub fn k(&self) -> usize {
        self.k
    }

    /// Count stored for `code`, 0 if the code is outside the table.
    pub fn get(&self, code: u64) -> usize {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// The raw counts in code order.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Converts to a sparse table holding only the non-zero entries.
    pub fn to_table(&self) -> FrequencyTable {
        let mut table = FrequencyTable::new(self.k);
        for (code, &count) in self.counts.iter().enumerate() {
            if count > 0 {
                table.add(decode_unchecked(code as u64, self.k).bases(), count);
            }
        }
        table
    }
}

/// Builds the sparse table of every k-mer occurring in `text`.
///
/// ```
/// use ori_core::counting::frequency_table;
/// use ori_core::sequence::Sequence;
///
/// let text = Sequence::new("ATGATGATG").unwrap();
/// let table = frequency_table(&text, 3);
/// assert_eq!(table.get("ATG"), 3);
/// assert_eq!(table.get("TGA"), 2);
/// ```
pub fn frequency_table(text: &Sequence, k: usize) -> FrequencyTable {
    text.kmers(k).fold(FrequencyTable::new(k), |mut table, kmer| {
        table.add(kmer, 1);
        table
    })
}

/// Builds the dense 4^k frequency array of `text`.
///
/// Fails with `ResourceLimitExceeded` when 4^k exceeds
/// `limits.max_table_size`.
#[instrument(level = "debug", skip(text, limits), fields(len = text.len()))]
pub fn frequency_array(text: &Sequence, k: usize, limits: &Limits) -> MotifResult<FrequencyArray> {
    let size = limits.check_table(k)?;
    let mut counts = vec![0usize; size];

    for kmer in text.kmers(k) {
        // The table check bounds k well below 32, so the code indexes `counts`.
        counts[encode_bytes(kmer.as_bytes()) as usize] += 1;
    }

    debug!(size, windows = kmer_count(text.len(), k), "frequency array built");
    Ok(FrequencyArray { k, counts })
}

/// Builds a table in which every observed k-mer credits its whole
/// d-neighborhood.
///
/// Fails with `ResourceLimitExceeded` when a single neighborhood exceeds
/// `limits.max_neighborhood_size`, or when the table could exceed
/// `limits.max_table_size`.
///
/// The resulting count of a pattern equals
/// [`count_with_mismatches`]`(pattern, text, d)`.
#[instrument(level = "debug", skip(text, limits), fields(len = text.len()))]
pub fn frequency_table_with_mismatches(
    text: &Sequence,
    k: usize,
    d: usize,
    limits: &Limits,
) -> MotifResult<FrequencyTable> {
    limits.check_neighborhood(k, d)?;

    let exact = frequency_table(text, k);
    limits.check_sparse_table(k, d, exact.len())?;
    let mut table = FrequencyTable::new(k);
    for (kmer, count) in exact.iter() {
        for neighbor in neighbor_bytes(kmer.as_bytes(), d) {
            table.add(Sequence::from_validated(neighbor).bases(), count);
        }
    }

    debug!(observed = exact.len(), candidates = table.len(), "mismatch table built");
    Ok(table)
}
