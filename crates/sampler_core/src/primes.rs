//! Prime table resource loader.
//!
//! The Halton generator needs one prime base per dimension. This module
//! loads those bases from a small text resource: whitespace-separated
//! integers, one or more per line, with `#` comment lines ignored. The
//! loader reads up to the first [`MAX_ENTRIES`] entries.
//!
//! The table is an explicitly constructed, immutable value passed into the
//! generator (dependency injection) rather than ambient global state.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::SamplerError;

/// Maximum number of primes read from a resource.
pub const MAX_ENTRIES: usize = 1000;

/// The bundled resource holding the first 1000 primes.
const BUNDLED_PRIMES: &str = include_str!("../resources/primes.txt");

/// An immutable, ascending table of prime numbers.
///
/// # Invariants
/// - Entries are unique, ascending, and at least 2.
/// - The table never changes after construction.
///
/// # Examples
/// ```
/// use sampler_core::primes::PrimeTable;
///
/// let table = PrimeTable::bundled().unwrap();
/// assert_eq!(table.len(), 1000);
/// assert_eq!(table.first(3).unwrap(), &[2, 3, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    /// The primes, ascending.
    primes: Vec<u64>,
}

impl PrimeTable {
    /// Loads the bundled table of the first 1000 primes.
    ///
    /// # Errors
    /// Returns [`SamplerError::PrimeTableUnavailable`] when the embedded
    /// resource fails to parse, which indicates a corrupted build.
    pub fn bundled() -> Result<Self, SamplerError> {
        Self::parse(BUNDLED_PRIMES)
    }

    /// Loads a table from a reader over the text resource format.
    ///
    /// # Errors
    /// Returns [`SamplerError::PrimeTableUnavailable`] on read failure, on a
    /// malformed token, on a non-ascending or sub-2 entry, or when the
    /// resource holds no entries at all.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, SamplerError> {
        let mut text = String::new();
        for line in reader.lines() {
            let line = line.map_err(|e| SamplerError::PrimeTableUnavailable(e.to_string()))?;
            text.push_str(&line);
            text.push('\n');
        }
        Self::parse(&text)
    }

    /// Loads a table from a file on disk.
    ///
    /// # Errors
    /// Returns [`SamplerError::PrimeTableUnavailable`] when the file cannot
    /// be opened, plus every failure mode of [`PrimeTable::from_reader`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SamplerError> {
        let file = File::open(path.as_ref()).map_err(|e| {
            SamplerError::PrimeTableUnavailable(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses the resource text: whitespace-separated integers, `#` comment
    /// lines ignored, capped at [`MAX_ENTRIES`] entries.
    fn parse(text: &str) -> Result<Self, SamplerError> {
        let mut primes = Vec::new();

        'lines: for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            for token in line.split_whitespace() {
                if primes.len() >= MAX_ENTRIES {
                    break 'lines;
                }
                let value: u64 = token.parse().map_err(|_| {
                    SamplerError::PrimeTableUnavailable(format!(
                        "malformed entry '{}'",
                        token
                    ))
                })?;
                if value < 2 {
                    return Err(SamplerError::PrimeTableUnavailable(format!(
                        "entry {} is not a prime",
                        value
                    )));
                }
                if let Some(&last) = primes.last() {
                    if value <= last {
                        return Err(SamplerError::PrimeTableUnavailable(format!(
                            "entries not ascending at {}",
                            value
                        )));
                    }
                }
                primes.push(value);
            }
        }

        if primes.is_empty() {
            return Err(SamplerError::PrimeTableUnavailable(
                "resource holds no entries".to_string(),
            ));
        }

        Ok(Self { primes })
    }

    /// Returns the number of primes in the table.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Returns `true` when the table is empty. Construction guarantees at
    /// least one entry, so this is always `false` for a loaded table.
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Returns the prime at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<u64> {
        self.primes.get(index).copied()
    }

    /// Returns the first `s` primes as a slice.
    ///
    /// # Errors
    /// Returns [`SamplerError::InsufficientPrimes`] when the table holds
    /// fewer than `s` entries.
    pub fn first(&self, s: usize) -> Result<&[u64], SamplerError> {
        if s > self.primes.len() {
            return Err(SamplerError::InsufficientPrimes {
                needed: s,
                available: self.primes.len(),
            });
        }
        Ok(&self.primes[..s])
    }
}
