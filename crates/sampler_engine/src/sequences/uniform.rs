//! Baseline pseudorandom sequence source.

use sampler_core::rng::SamplerRng;
use sampler_core::types::{SamplerError, Sequence};

use crate::sequences::{check_shape, SequenceSource};

/// Independent uniform sampling of the unit hypercube.
///
/// Every coordinate of every vector is an independent draw from `[0, 1)`.
/// This is the baseline sampler and the default sequence source for the
/// normal transforms.
///
/// # Examples
/// ```
/// use sampler_core::rng::SamplerRng;
/// use sampler_engine::sequences::{SequenceSource, UniformSampler};
///
/// let mut rng = SamplerRng::from_seed(42);
/// let seq = UniformSampler.generate(3, 10, &mut rng).unwrap();
/// assert_eq!(seq.len(), 10);
/// assert_eq!(seq.dimension(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSampler;

impl SequenceSource for UniformSampler {
    fn generate(
        &self,
        s: usize,
        n: usize,
        rng: &mut SamplerRng,
    ) -> Result<Sequence, SamplerError> {
        check_shape(s, n)?;

        let mut points = Vec::with_capacity(n);
        for _ in 0..n {
            let mut point = vec![0.0; s];
            rng.fill_uniform(&mut point);
            points.push(point);
        }
        Sequence::new(s, points)
    }
}
