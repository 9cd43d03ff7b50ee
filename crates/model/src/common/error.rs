//! Configuration error definitions.
//!
//! The error taxonomy is minimal by design: once a run starts it proceeds to
//! completion, so the only failures are caller-supplied configuration bugs,
//! reported before any cache work begins. Address values, page numbers, and
//! cache lookups accept all non-negative integers unconditionally.

use thiserror::Error;

/// An invalid simulation configuration.
///
/// Raised by the harness entry points and by [`crate::config::Config::validate`]
/// before any simulation work starts. Configuration errors are caller bugs,
/// not transient failures; they are never retried.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Page size must be a positive number of bytes.
    #[error("page size must be a positive number of bytes")]
    ZeroPageSize,

    /// A hit ratio was requested over an empty address trace.
    #[error("trace must contain at least one address")]
    EmptyTrace,

    /// The hot-page access probability must lie in [0, 1].
    #[error("hot fraction {0} is outside [0, 1]")]
    InvalidHotFraction(f64),

    /// Traffic generation needs at least one access.
    #[error("access count must be at least 1")]
    ZeroAccessCount,

    /// Traffic generation needs a non-empty hot set and page pool.
    #[error("trace must draw from at least one hot page and one total page")]
    EmptyPagePool,

    /// Sweep range lower bound exceeds its upper bound.
    #[error("sweep range is inverted: min_entries {min} > max_entries {max}")]
    InvertedSweepRange {
        /// Smallest capacity in the requested sweep.
        min: usize,
        /// Largest capacity in the requested sweep.
        max: usize,
    },
}
