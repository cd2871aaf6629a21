//! Most frequent k-mers, exact and mismatch-tolerant.

use std::fmt;

use indexmap::IndexSet;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::codec::{decode_unchecked, encode_bytes, MAX_K};
use crate::counting::{frequency_array, frequency_table, frequency_table_with_mismatches};
use crate::error::{MotifError, MotifResult, Resource};
use crate::limits::{code_space, Limits};
use crate::sequence::Sequence;

/// Which strands a mismatch-tolerant search counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    /// Only the text as given.
    #[default]
    Forward,
    /// The text and its reverse complement.
    Both,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "forward"),
            Strand::Both => write!(f, "both"),
        }
    }
}

/// Distinct k-mers of `text` in order of first occurrence, kept if `keep`
/// accepts them.
fn first_occurrences<'a>(
    text: &'a Sequence,
    k: usize,
    mut keep: impl FnMut(&str) -> bool,
) -> Vec<String> {
    let mut found: IndexSet<&'a str> = IndexSet::new();
    for kmer in text.kmers(k) {
        if !found.contains(kmer) && keep(kmer) {
            found.insert(kmer);
        }
    }
    found.into_iter().map(str::to_owned).collect()
}

/// Returns the k-mers with the highest count in `text`.
///
/// Patterns are listed once each, in order of first occurrence.
///
/// ```
/// use ori_core::frequent::frequent_words;
/// use ori_core::sequence::Sequence;
///
/// let text = Sequence::new("ACGTTGCATGTCGCATGATGCATGAGAGCT").unwrap();
/// assert_eq!(frequent_words(&text, 4), vec!["GCAT", "CATG"]);
/// ```
pub fn frequent_words(text: &Sequence, k: usize) -> Vec<String> {
    let table = frequency_table(text, k);
    let max = table.max_count();
    first_occurrences(text, k, |kmer| table.get(kmer) == max)
}

/// Same result as [`frequent_words`], counted through the dense frequency
/// array.
pub fn faster_frequent_words(text: &Sequence, k: usize, limits: &Limits) -> MotifResult<Vec<String>> {
    let array = frequency_array(text, k, limits)?;
    let max = array.max_count();
    Ok(first_occurrences(text, k, |kmer| {
        array.get(encode_bytes(kmer.as_bytes())) == max
    }))
}

/// Same set as [`frequent_words`], found by sorting the k-mer codes and
/// scanning runs. Patterns come back in lexicographic order.
pub fn frequent_words_by_sorting(text: &Sequence, k: usize) -> MotifResult<Vec<String>> {
    if k > MAX_K {
        return Err(MotifError::ResourceLimitExceeded {
            resource: Resource::CodeSpace,
            requested: code_space(k).unwrap_or(u128::MAX),
            limit: code_space(MAX_K).unwrap_or(u128::MAX),
        });
    }

    let mut codes: Vec<u64> = text.kmers(k).map(|kmer| encode_bytes(kmer.as_bytes())).collect();
    codes.sort_unstable();

    let mut runs: Vec<(u64, usize)> = Vec::new();
    for code in codes {
        match runs.last_mut() {
            Some((last, count)) if *last == code => *count += 1,
            _ => runs.push((code, 1)),
        }
    }

    let max = runs.iter().map(|&(_, count)| count).max().unwrap_or(0);
    Ok(runs
        .into_iter()
        .filter(|&(_, count)| count == max)
        .map(|(code, _)| decode_unchecked(code, k).into_string())
        .collect())
}

/// Returns the k-mers maximizing the number of windows within distance `d`.
///
/// With [`Strand::Both`] the count of a pattern also includes the windows
/// within distance `d` of its reverse complement. The candidates need not
/// occur in the text, so the result is in lexicographic order.
///
/// ```
/// use ori_core::frequent::{frequent_words_with_mismatches, Strand};
/// use ori_core::limits::Limits;
/// use ori_core::sequence::Sequence;
///
/// let text = Sequence::new("ACGTTGCATGTCGCATGATGCATGAGAGCT").unwrap();
/// let words = frequent_words_with_mismatches(&text, 4, 1, Strand::Forward, &Limits::default()).unwrap();
/// assert_eq!(words, vec!["ATGC", "ATGT", "GATG"]);
/// ```
#[instrument(level = "debug", skip(text, limits), fields(len = text.len()))]
pub fn frequent_words_with_mismatches(
    text: &Sequence,
    k: usize,
    d: usize,
    strand: Strand,
    limits: &Limits,
) -> MotifResult<Vec<String>> {
    let mut table = frequency_table_with_mismatches(text, k, d, limits)?;
    if strand == Strand::Both {
        let reverse = frequency_table_with_mismatches(&text.reverse_complement(), k, d, limits)?;
        table.merge(&reverse);
    }

    if table.is_empty() {
        return Ok(Vec::new());
    }

    let words = table.at_least(table.max_count());
    debug!(max = table.max_count(), found = words.len(), "mismatch frequent words");
    Ok(words)
}
