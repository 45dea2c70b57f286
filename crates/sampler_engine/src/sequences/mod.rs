//! Sequence sources over the unit hypercube.
//!
//! Three generators produce `n` vectors of dimension `s` with every
//! coordinate in `[0, 1)`:
//! - [`UniformSampler`]: independent pseudorandom draws (baseline)
//! - [`HaltonSampler`]: low-discrepancy radical-inverse sequences keyed by
//!   the first `s` primes
//! - [`LatticeSampler`]: stratified jittered-grid sampling, one sample per
//!   cell
//!
//! All three implement [`SequenceSource`], which is the seam the normal
//! transforms consume.

pub mod halton;
pub mod lattice;
pub mod uniform;

pub use halton::{radical_inverse, HaltonSampler};
pub use lattice::{LatticeSampler, Layout};
pub use uniform::UniformSampler;

use sampler_core::rng::SamplerRng;
use sampler_core::types::{SamplerError, Sequence};

/// A source of fixed-dimension sample sequences over `[0, 1)^s`.
///
/// Implementations must return exactly `n` vectors of dimension exactly
/// `s`, with every coordinate in `[0, 1)`. Randomness is drawn only from
/// the injected stream, so a seeded stream makes any source reproducible.
pub trait SequenceSource {
    /// Generates `n` vectors of dimension `s`.
    ///
    /// # Errors
    /// Returns [`SamplerError::InvalidDimension`] when `s == 0` and
    /// `n > 0`, plus any source-specific failure mode.
    fn generate(
        &self,
        s: usize,
        n: usize,
        rng: &mut SamplerRng,
    ) -> Result<Sequence, SamplerError>;
}

/// Validates the common shape contract shared by every source.
///
/// `n == 0` is allowed with any `s` (the result is an empty sequence);
/// otherwise the dimension must be at least 1.
pub(crate) fn check_shape(s: usize, n: usize) -> Result<(), SamplerError> {
    if s == 0 && n > 0 {
        return Err(SamplerError::InvalidDimension { s });
    }
    Ok(())
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use sampler_core::primes::PrimeTable;

    fn assert_shape(seq: &Sequence, s: usize, n: usize) {
        assert_eq!(seq.len(), n);
        assert_eq!(seq.dimension(), s);
        for point in seq {
            assert_eq!(point.len(), s);
            for &c in point {
                assert!((0.0..1.0).contains(&c), "coordinate {} outside [0, 1)", c);
            }
        }
    }

    proptest! {
        #[test]
        fn uniform_shape(s in 1usize..6, n in 0usize..200, seed in any::<u64>()) {
            let mut rng = SamplerRng::from_seed(seed);
            let seq = UniformSampler.generate(s, n, &mut rng).unwrap();
            assert_shape(&seq, s, n);
        }

        #[test]
        fn halton_shape(s in 1usize..6, n in 0usize..200, seed in any::<u64>()) {
            let table = PrimeTable::bundled().unwrap();
            let mut rng = SamplerRng::from_seed(seed);
            let seq = HaltonSampler::new(table).generate(s, n, &mut rng).unwrap();
            assert_shape(&seq, s, n);
        }

        #[test]
        fn lattice_shape(s in 1usize..4, n in 0usize..200, seed in any::<u64>()) {
            let mut rng = SamplerRng::from_seed(seed);
            let seq = LatticeSampler::default().generate(s, n, &mut rng).unwrap();
            assert_shape(&seq, s, n);
        }

        #[test]
        fn zero_dimension_rejected(n in 1usize..50, seed in any::<u64>()) {
            let mut rng = SamplerRng::from_seed(seed);
            let err = UniformSampler.generate(0, n, &mut rng).unwrap_err();
            prop_assert_eq!(err, SamplerError::InvalidDimension { s: 0 });
        }
    }
}
