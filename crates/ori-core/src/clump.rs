//! (L, t)-clump finding.
//!
//! Every window of length L is counted from scratch, so the cost is
//! O(windows × L). The result is the union of the per-window answers.

use indexmap::IndexSet;
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::counting::frequency_table;
use crate::sequence::{kmer_count, Sequence};

/// k-mers occurring at least `t` times in the window `[start, start + window)`,
/// in order of first occurrence within the window.
fn window_clumps(genome: &Sequence, start: usize, k: usize, window: usize, t: usize) -> Vec<String> {
    let Some(region) = genome.window(start, window) else {
        return Vec::new();
    };

    let table = frequency_table(&region, k);
    let mut found: IndexSet<&str> = IndexSet::new();
    for kmer in region.kmers(k) {
        if table.get(kmer) >= t {
            found.insert(kmer);
        }
    }
    found.into_iter().map(str::to_owned).collect()
}

fn union_in_order(per_window: impl IntoIterator<Item = Vec<String>>) -> Vec<String> {
    let mut clumps: IndexSet<String> = IndexSet::new();
    for patterns in per_window {
        clumps.extend(patterns);
    }
    clumps.into_iter().collect()
}

/// Returns every k-mer forming an (L, t)-clump in `genome`.
///
/// A window of length `window` (L) slides over every start offset; a k-mer
/// counted at least `t` times in any window is reported. Patterns are listed
/// once, in the order they were first found.
///
/// ```
/// use ori_core::clump::clump_finding;
/// use ori_core::sequence::Sequence;
///
/// let genome = Sequence::new(
///     "CGGACTCGACAGATGTGAAGAACGACAATGTGAAGACTCGACACGACAGAGTGAAGAGAAGAGGAAACATTGTAA",
/// ).unwrap();
/// assert_eq!(clump_finding(&genome, 5, 50, 4), vec!["CGACA", "GAAGA"]);
/// ```
#[instrument(level = "debug", skip(genome), fields(len = genome.len()))]
pub fn clump_finding(genome: &Sequence, k: usize, window: usize, t: usize) -> Vec<String> {
    let windows = kmer_count(genome.len(), window);
    let clumps = union_in_order((0..windows).map(|start| window_clumps(genome, start, k, window, t)));
    debug!(windows, found = clumps.len(), "clump finding done");
    clumps
}

/// Parallel form of [`clump_finding`]; windows are scanned on the rayon pool.
///
/// The result, including its order, is identical to the sequential version.
#[instrument(level = "debug", skip(genome), fields(len = genome.len()))]
pub fn par_clump_finding(genome: &Sequence, k: usize, window: usize, t: usize) -> Vec<String> {
    let windows = kmer_count(genome.len(), window);
    let per_window: Vec<Vec<String>> = (0..windows)
        .into_par_iter()
        .map(|start| window_clumps(genome, start, k, window, t))
        .collect();
    let clumps = union_in_order(per_window);
    debug!(windows, found = clumps.len(), "parallel clump finding done");
    clumps
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENOME: &str =
        "CGGACTCGACAGATGTGAAGAACGACAATGTGAAGACTCGACACGACAGAGTGAAGAGAAGAGGAAACATTGTAA";

    fn seq(s: &str) -> Sequence {
        Sequence::new(s).unwrap()
    }

    #[test]
    fn test_sample_clumps() {
        assert_eq!(clump_finding(&seq(GENOME), 5, 50, 4), vec!["CGACA", "GAAGA"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let genome = seq(GENOME);
        for (k, window, t) in [(5, 50, 4), (3, 20, 2), (2, 10, 3), (4, 75, 1)] {
            assert_eq!(
                par_clump_finding(&genome, k, window, t),
                clump_finding(&genome, k, window, t)
            );
        }
    }

    #[test]
    fn test_window_longer_than_genome() {
        assert!(clump_finding(&seq("ACGTACGT"), 2, 9, 1).is_empty());
    }

    #[test]
    fn test_whole_genome_window() {
        let clumps = clump_finding(&seq("AAAAC"), 2, 5, 3);
        assert_eq!(clumps, vec!["AA"]);
    }
}
