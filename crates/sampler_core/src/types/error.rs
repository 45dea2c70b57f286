//! Error types for structured error handling.
//!
//! A single [`SamplerError`] enum covers every failure mode in the toolkit.
//! Errors are detected eagerly at the start of an operation (input
//! validation) or at the specific point of undefined arithmetic; none are
//! silently recovered and no partial results are returned on failure.

use thiserror::Error;

/// Categorised sampling errors.
///
/// Each variant carries the offending parameter or value so that a failure
/// can be diagnosed without re-running the operation.
///
/// # Examples
/// ```
/// use sampler_core::types::SamplerError;
///
/// let err = SamplerError::InvalidDimension { s: 0 };
/// assert_eq!(format!("{}", err), "Invalid dimension: 0 (must be at least 1)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// Dimension is zero where a positive dimension is required.
    #[error("Invalid dimension: {s} (must be at least 1)")]
    InvalidDimension {
        /// The requested dimension.
        s: usize,
    },

    /// Sample count invalid for the requested operation.
    #[error("Invalid sample count: {n}")]
    InvalidCount {
        /// The requested sample count.
        n: usize,
    },

    /// Halton generation requested more dimensions than the prime table holds.
    #[error("Insufficient primes: need {needed}, table holds {available}")]
    InsufficientPrimes {
        /// Number of primes required (one per dimension).
        needed: usize,
        /// Number of primes available in the table.
        available: usize,
    },

    /// The lattice bin-count search produced fewer cells than samples
    /// requested. This is an internal invariant violation.
    #[error("Lattice undersized: {cells} cells for {requested} samples")]
    LatticeUndersized {
        /// Number of cells the partition produced.
        cells: usize,
        /// Number of samples requested.
        requested: usize,
    },

    /// A transform was fed a uniform value outside its open-interval domain.
    #[error("Value {value} outside the open interval (0, 1)")]
    DomainError {
        /// The offending input value.
        value: f64,
    },

    /// A goodness-of-fit statistic was given a zero-variance sample, for
    /// which standardisation is undefined.
    #[error("Degenerate sample: zero standard deviation")]
    DegenerateSample,

    /// The prime table resource could not be loaded or parsed.
    #[error("Prime table unavailable: {0}")]
    PrimeTableUnavailable(String),
}
