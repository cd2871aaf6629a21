//! ori-core - k-mer enumeration and approximate motif matching.
//!
//! This crate implements the combinatorial primitives used to hunt for
//! replication origins in a genome:
//!
//! - a bijective codec between k-mers and integers in `[0, 4^k)`
//! - Hamming distance and suffix-recursive Hamming neighborhoods
//! - exact and mismatch-tolerant k-mer counting (sparse and dense tables)
//! - frequent words, (L, t)-clumps, pattern matching, reverse complements
//!   and G/C skew
//!
//! Every function is a pure computation over a validated [`Sequence`]; there
//! is no global state, so calls on disjoint inputs may run concurrently.
//!
//! # Example
//!
//! ```rust
//! use ori_core::{frequent_words, minimum_skew_positions, Sequence};
//!
//! let genome = Sequence::new("ACGTTGCATGTCGCATGATGCATGAGAGCT").unwrap();
//! let mut words = frequent_words(&genome, 4);
//! words.sort();
//! assert_eq!(words, vec!["CATG", "GCAT"]);
//!
//! let origin = minimum_skew_positions(&Sequence::new("CATGGGC").unwrap());
//! assert_eq!(origin, vec![1, 2, 3]);
//! ```

pub mod clump;
pub mod codec;
pub mod counting;
pub mod distance;
pub mod error;
pub mod frequent;
pub mod limits;
pub mod matching;
pub mod neighbors;
pub mod sequence;
pub mod skew;

// Re-export commonly used items for convenience
pub use clump::{clump_finding, par_clump_finding};
pub use codec::{decode, decode_signed, encode, encode_sequence, MAX_K};
pub use counting::{
    count_with_mismatches, frequency_array, frequency_table, frequency_table_with_mismatches,
    pattern_count, FrequencyArray, FrequencyTable,
};
pub use distance::hamming_distance;
pub use error::{MotifError, MotifResult, Resource};
pub use frequent::{
    faster_frequent_words, frequent_words, frequent_words_by_sorting,
    frequent_words_with_mismatches, Strand,
};
pub use limits::Limits;
pub use matching::{approximate_pattern_matching, pattern_matching};
pub use neighbors::{immediate_neighbors, neighborhood_size, neighbors};
pub use sequence::{complement, reverse_complement, Sequence, ALPHABET};
pub use skew::{minimum_skew_positions, skew_array};

/// Library version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
