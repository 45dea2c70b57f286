//! Halton low-discrepancy sequence source.
//!
//! Each dimension of the Halton sequence is the radical-inverse sequence in
//! a distinct prime base; the bases are the first `s` entries of an
//! injected [`PrimeTable`]. An optional per-call Cranley-Patterson rotation
//! decorrelates repeated calls while preserving the low-discrepancy
//! structure.

use sampler_core::primes::PrimeTable;
use sampler_core::rng::SamplerRng;
use sampler_core::types::{SamplerError, Sequence};

use crate::sequences::{check_shape, SequenceSource};

/// Computes the radical inverse of `index` in the given base.
///
/// The base-`base` digit expansion of `index` is mirrored around the radix
/// point: repeatedly divide the index by the base, accumulating
/// `digit / base^k` terms. For a prime base this yields one dimension of
/// the Halton sequence. Deterministic and independent of any random
/// stream.
///
/// # Examples
/// ```
/// use sampler_engine::sequences::radical_inverse;
///
/// assert_eq!(radical_inverse(1, 2), 0.5);
/// assert_eq!(radical_inverse(2, 2), 0.25);
/// assert_eq!(radical_inverse(3, 2), 0.75);
/// ```
pub fn radical_inverse(index: u64, base: u64) -> f64 {
    debug_assert!(base >= 2, "radical inverse base must be at least 2");

    let mut value = 0.0;
    let mut fraction = 1.0;
    let mut remaining = index;
    while remaining > 0 {
        fraction /= base as f64;
        value += fraction * (remaining % base) as f64;
        remaining /= base;
    }
    value
}

/// Low-discrepancy sampling via per-dimension radical inverses.
///
/// Vector `k` (for `k = 1..=n`) has coordinate `i` equal to
/// `radical_inverse(k, prime[i])`. With the shift enabled (the default), a
/// single random offset vector is drawn per call and added modulo 1 to
/// every point (Cranley-Patterson rotation); with it disabled, generation
/// is fully deterministic.
///
/// # Examples
/// ```
/// use sampler_core::primes::PrimeTable;
/// use sampler_core::rng::SamplerRng;
/// use sampler_engine::sequences::{HaltonSampler, SequenceSource};
///
/// let table = PrimeTable::bundled().unwrap();
/// let sampler = HaltonSampler::new(table).with_shift(false);
/// let mut rng = SamplerRng::from_seed(42);
/// let seq = sampler.generate(2, 4, &mut rng).unwrap();
/// assert_eq!(seq[0], [0.5, 1.0 / 3.0]);
/// ```
#[derive(Debug, Clone)]
pub struct HaltonSampler {
    /// Prime bases, one consumed per dimension.
    table: PrimeTable,
    /// Whether to apply the per-call Cranley-Patterson rotation.
    shift: bool,
}

impl HaltonSampler {
    /// Creates a sampler over the given prime table with the rotation
    /// enabled.
    pub fn new(table: PrimeTable) -> Self {
        Self { table, shift: true }
    }

    /// Enables or disables the per-call rotation.
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Returns whether the rotation is enabled.
    pub fn shift(&self) -> bool {
        self.shift
    }
}

impl SequenceSource for HaltonSampler {
    fn generate(
        &self,
        s: usize,
        n: usize,
        rng: &mut SamplerRng,
    ) -> Result<Sequence, SamplerError> {
        check_shape(s, n)?;
        let bases = self.table.first(s)?;

        // One offset vector per call; unused when the shift is off.
        let offsets: Vec<f64> = if self.shift {
            (0..s).map(|_| rng.gen_uniform()).collect()
        } else {
            vec![0.0; s]
        };

        let mut points = Vec::with_capacity(n);
        for k in 1..=n as u64 {
            let point: Vec<f64> = bases
                .iter()
                .zip(&offsets)
                .map(|(&base, &offset)| (radical_inverse(k, base) + offset) % 1.0)
                .collect();
            points.push(point);
        }
        Sequence::new(s, points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler(shift: bool) -> HaltonSampler {
        HaltonSampler::new(PrimeTable::bundled().unwrap()).with_shift(shift)
    }

    #[test]
    fn test_radical_inverse_base_two() {
        assert_eq!(radical_inverse(1, 2), 0.5);
        assert_eq!(radical_inverse(2, 2), 0.25);
        assert_eq!(radical_inverse(3, 2), 0.75);
        assert_eq!(radical_inverse(4, 2), 0.125);
    }

    #[test]
    fn test_radical_inverse_base_three() {
        assert!((radical_inverse(1, 3) - 1.0 / 3.0).abs() < 1e-15);
        assert!((radical_inverse(2, 3) - 2.0 / 3.0).abs() < 1e-15);
        assert!((radical_inverse(3, 3) - 1.0 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn test_radical_inverse_zero_index() {
        assert_eq!(radical_inverse(0, 2), 0.0);
    }

    #[test]
    fn test_unshifted_is_deterministic() {
        let mut rng1 = SamplerRng::from_seed(1);
        let mut rng2 = SamplerRng::from_seed(999);
        let a = sampler(false).generate(3, 50, &mut rng1).unwrap();
        let b = sampler(false).generate(3, 50, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shifted_calls_differ() {
        let mut rng = SamplerRng::from_seed(42);
        let a = sampler(true).generate(2, 50, &mut rng).unwrap();
        let b = sampler(true).generate(2, 50, &mut rng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_shift_preserves_pairwise_structure() {
        // Differences between points within a call are shift-invariant
        // modulo 1.
        let mut rng = SamplerRng::from_seed(42);
        let shifted = sampler(true).generate(2, 20, &mut rng).unwrap();
        let plain = sampler(false).generate(2, 20, &mut rng).unwrap();

        for k in 1..20 {
            for i in 0..2 {
                let d_shifted = (shifted[k][i] - shifted[0][i]).rem_euclid(1.0);
                let d_plain = (plain[k][i] - plain[0][i]).rem_euclid(1.0);
                let wrap = (d_shifted - d_plain).rem_euclid(1.0);
                assert!(
                    wrap < 1e-9 || wrap > 1.0 - 1e-9,
                    "pairwise difference not shift-invariant: {} vs {}",
                    d_shifted,
                    d_plain
                );
            }
        }
    }

    #[test]
    fn test_coordinates_in_unit_interval() {
        let mut rng = SamplerRng::from_seed(42);
        let seq = sampler(true).generate(5, 200, &mut rng).unwrap();
        for point in &seq {
            for &c in point {
                assert!((0.0..1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_insufficient_primes() {
        let table = PrimeTable::from_reader("2 3 5".as_bytes()).unwrap();
        let mut rng = SamplerRng::from_seed(42);
        let err = HaltonSampler::new(table)
            .generate(4, 10, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            SamplerError::InsufficientPrimes {
                needed: 4,
                available: 3,
            }
        );
    }
}
