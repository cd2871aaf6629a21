//! Resource ceilings for the exponential parts of the engine.
//!
//! Dense frequency arrays hold 4^k entries and Hamming neighborhoods grow as
//! Σ C(k,i)·3^i, so both are checked against a [`Limits`] before anything is
//! allocated.

use serde::Deserialize;
use tracing::warn;

use crate::error::{MotifError, MotifResult, Resource};
use crate::neighbors::neighborhood_size;

/// Default ceiling for dense tables: 4^12 entries.
pub const DEFAULT_MAX_TABLE_SIZE: u64 = 1 << 24;

/// Default ceiling for a single neighborhood.
pub const DEFAULT_MAX_NEIGHBORHOOD_SIZE: u64 = 1 << 22;

/// Configurable ceilings on table and neighborhood sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum number of entries in a dense frequency array.
    pub max_table_size: u64,
    /// Maximum number of patterns in one Hamming neighborhood.
    pub max_neighborhood_size: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_table_size: DEFAULT_MAX_TABLE_SIZE,
            max_neighborhood_size: DEFAULT_MAX_NEIGHBORHOOD_SIZE,
        }
    }
}

impl Limits {
    /// No ceiling at all. Intended for tests and trusted callers.
    pub fn unbounded() -> Self {
        Self {
            max_table_size: u64::MAX,
            max_neighborhood_size: u64::MAX,
        }
    }

    /// Checks that a dense table over all k-mers fits.
    pub fn check_table(&self, k: usize) -> MotifResult<usize> {
        let requested = code_space(k).unwrap_or(u128::MAX);
        if requested > u128::from(self.max_table_size) || requested > usize::MAX as u128 {
            warn!(k, requested = %requested, limit = self.max_table_size, "frequency table rejected");
            return Err(MotifError::ResourceLimitExceeded {
                resource: Resource::FrequencyTable,
                requested,
                limit: u128::from(self.max_table_size),
            });
        }
        Ok(requested as usize)
    }

    /// Checks that the neighborhood of a k-mer at distance `d` fits.
    pub fn check_neighborhood(&self, k: usize, d: usize) -> MotifResult<usize> {
        let requested = neighborhood_size(k, d).unwrap_or(u128::MAX);
        if requested > u128::from(self.max_neighborhood_size) || requested > usize::MAX as u128 {
            warn!(k, d, requested = %requested, limit = self.max_neighborhood_size, "neighborhood rejected");
            return Err(MotifError::ResourceLimitExceeded {
                resource: Resource::Neighborhood,
                requested,
                limit: u128::from(self.max_neighborhood_size),
            });
        }
        Ok(requested as usize)
    }

    /// Checks that a sparse table crediting the d-neighborhood of `observed`
    /// distinct k-mers fits.
    ///
    /// The table can hold at most `min(4^k, observed * |neighborhood|)`
    /// patterns; that bound is compared with `max_table_size`.
    pub fn check_sparse_table(&self, k: usize, d: usize, observed: usize) -> MotifResult<usize> {
        let reach = neighborhood_size(k, d)
            .and_then(|size| size.checked_mul(observed as u128))
            .unwrap_or(u128::MAX);
        let requested = code_space(k).unwrap_or(u128::MAX).min(reach);
        if requested > u128::from(self.max_table_size) || requested > usize::MAX as u128 {
            warn!(k, d, observed, requested = %requested, limit = self.max_table_size, "sparse table rejected");
            return Err(MotifError::ResourceLimitExceeded {
                resource: Resource::FrequencyTable,
                requested,
                limit: u128::from(self.max_table_size),
            });
        }
        Ok(requested as usize)
    }
}

/// Number of distinct k-mers, 4^k, or `None` if it does not fit in a `u128`.
pub fn code_space(k: usize) -> Option<u128> {
    let bits = u32::try_from(k).ok()?.checked_mul(2)?;
    1u128.checked_shl(bits)
}
