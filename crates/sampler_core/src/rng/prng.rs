//! Seeded pseudo-random stream wrapper.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Uniform `[0, 1)` random stream for sequence generation.
///
/// Wraps a seedable PRNG so that every generator in the toolkit draws from
/// an explicitly injected stream instead of process-wide global state. The
/// same seed always produces the same sequence of values, which makes every
/// downstream generator reproducible.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::SamplerRng;
///
/// let mut rng1 = SamplerRng::from_seed(42);
/// let mut rng2 = SamplerRng::from_seed(42);
/// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
/// ```
pub struct SamplerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, when one was given.
    seed: Option<u64>,
}

impl SamplerRng {
    /// Creates a stream initialised with the given seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value for reproducibility
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a stream seeded from operating system entropy.
    ///
    /// Sequences produced from an entropy-seeded stream are not
    /// reproducible; use [`SamplerRng::from_seed`] when determinism is
    /// required.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Returns the seed used for initialisation, or `None` for an
    /// entropy-seeded stream.
    ///
    /// Useful for logging and debugging reproducibility issues.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a single uniform value in `[0, 1)`.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean 0, std 1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`. This is
    /// the reference normal source used to cross-check the toolkit's own
    /// uniform-to-normal transforms.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with uniform values in `[0, 1)`.
    ///
    /// Zero-allocation; the buffer must be pre-allocated by the caller.
    /// Empty buffers are a no-op.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation; the buffer must be pre-allocated by the caller.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }

    /// Permutes the slice uniformly at random (Fisher-Yates).
    ///
    /// Used by the lattice generator to decorrelate cell enumeration order
    /// from consumption order.
    #[inline]
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.inner);
    }
}
