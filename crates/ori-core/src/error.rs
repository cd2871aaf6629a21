//! Errors raised by the motif engine.

use std::fmt;
use thiserror::Error;

/// Result type for motif operations.
pub type MotifResult<T> = Result<T, MotifError>;

/// The kind of resource whose size is bounded by [`crate::limits::Limits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// A dense frequency array over the whole code space (4^k entries).
    FrequencyTable,
    /// A Hamming neighborhood.
    Neighborhood,
    /// The integer code space of the sequence codec.
    CodeSpace,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::FrequencyTable => write!(f, "frequency table"),
            Resource::Neighborhood => write!(f, "neighborhood"),
            Resource::CodeSpace => write!(f, "code space"),
        }
    }
}

/// Errors that can occur while encoding, comparing or counting sequences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotifError {
    /// A character outside {A, C, G, T} was found.
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// Two sequences that must have equal length do not.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A code does not lie in [0, 4^k).
    #[error("code {code} is out of range for k = {k}")]
    OutOfRange { code: i128, k: usize },

    /// The requested table or neighborhood is larger than the configured ceiling.
    #[error("{resource} of size {requested} exceeds the limit of {limit}")]
    ResourceLimitExceeded {
        resource: Resource,
        requested: u128,
        limit: u128,
    },
}
