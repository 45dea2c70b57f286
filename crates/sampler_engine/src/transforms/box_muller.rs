//! Box-Muller normal transform.
//!
//! Consumes pairs of uniform coordinates and emits pairs of independent
//! standard-normal coordinates via the polar reparametrisation
//! `r = sqrt(-2 ln u1)`, `theta = 2 pi u2`.

use sampler_core::rng::SamplerRng;
use sampler_core::types::{SamplerError, Sequence};

use crate::sequences::SequenceSource;

/// Transforms one uniform pair into one standard-normal pair.
///
/// Given independent `u1, u2` uniform in `(0, 1)`, returns
/// `(r cos theta, r sin theta)` with `r = sqrt(-2 ln u1)` and
/// `theta = 2 pi u2`; the outputs are independent standard normals.
///
/// # Errors
/// Returns [`SamplerError::DomainError`] when either input lies outside
/// the open interval `(0, 1)`. Zero in particular is rejected because the
/// logarithm is undefined there.
///
/// # Examples
/// ```
/// use sampler_engine::transforms::box_muller::transform_pair;
///
/// let (x, y) = transform_pair(0.5, 0.5).unwrap();
/// // theta = pi, so x = -sqrt(2 ln 2) and y is numerically zero
/// assert!(x < 0.0);
/// assert!(y.abs() < 1e-10);
/// ```
pub fn transform_pair(u1: f64, u2: f64) -> Result<(f64, f64), SamplerError> {
    for u in [u1, u2] {
        if !(u > 0.0 && u < 1.0) {
            return Err(SamplerError::DomainError { value: u });
        }
    }

    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;
    Ok((r * theta.cos(), r * theta.sin()))
}

/// Draws a uniform sequence from `source` and transforms it pairwise into
/// standard-normal vectors.
///
/// Box-Muller consumes coordinates two at a time, so `s` and `n` are
/// rounded up to even values for the draw; each vector is then cut back to
/// `s` coordinates and the sequence to `n` vectors.
///
/// # Errors
/// Propagates the source's errors, plus [`SamplerError::DomainError`] when
/// the source emits a coordinate of exactly zero.
pub fn transform_sequence<S: SequenceSource + ?Sized>(
    source: &S,
    s: usize,
    n: usize,
    rng: &mut SamplerRng,
) -> Result<Sequence, SamplerError> {
    let s_even = s + s % 2;
    let n_even = n + n % 2;

    let uniforms = source.generate(s_even, n_even, rng)?;

    let mut points = Vec::with_capacity(n);
    for row in uniforms.iter().take(n) {
        let mut point = Vec::with_capacity(s_even);
        for pair in row.chunks_exact(2) {
            let (x, y) = transform_pair(pair[0], pair[1])?;
            point.push(x);
            point.push(y);
        }
        point.truncate(s);
        points.push(point);
    }
    Sequence::new(s, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequences::UniformSampler;
    use approx::assert_relative_eq;

    #[test]
    fn test_pair_at_half_half() {
        let (x, y) = transform_pair(0.5, 0.5).unwrap();
        // r = sqrt(2 ln 2), theta = pi
        assert_relative_eq!(x, -(2.0 * 2.0_f64.ln()).sqrt(), epsilon = 1e-12);
        assert!(y.abs() < 1e-10);
    }

    #[test]
    fn test_pair_closed_form() {
        let (u1, u2): (f64, f64) = (0.25, 0.75);
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;
        let (x, y) = transform_pair(u1, u2).unwrap();
        assert_relative_eq!(x, r * theta.cos(), epsilon = 1e-12);
        assert_relative_eq!(y, r * theta.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_pair_rejects_zero() {
        let err = transform_pair(0.0, 0.5).unwrap_err();
        assert_eq!(err, SamplerError::DomainError { value: 0.0 });

        let err = transform_pair(0.5, 0.0).unwrap_err();
        assert_eq!(err, SamplerError::DomainError { value: 0.0 });
    }

    #[test]
    fn test_pair_rejects_one() {
        let err = transform_pair(1.0, 0.5).unwrap_err();
        assert_eq!(err, SamplerError::DomainError { value: 1.0 });
    }

    #[test]
    fn test_sequence_odd_shape_restored() {
        // Odd s and n are rounded up internally, then cut back.
        let mut rng = SamplerRng::from_seed(42);
        let seq = transform_sequence(&UniformSampler, 3, 5, &mut rng).unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.dimension(), 3);
        for point in &seq {
            for &c in point {
                assert!(c.is_finite());
            }
        }
    }

    #[test]
    fn test_sequence_moments() {
        let mut rng = SamplerRng::from_seed(42);
        let seq = transform_sequence(&UniformSampler, 1, 20_000, &mut rng).unwrap();
        let sample = seq.column(0);

        let n = sample.len() as f64;
        let mean: f64 = sample.iter().sum::<f64>() / n;
        let var: f64 = sample.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
        assert!(mean.abs() < 0.05, "mean {} too far from 0", mean);
        assert!((var - 1.0).abs() < 0.05, "variance {} too far from 1", var);
    }

    #[test]
    fn test_sequence_reproducibility() {
        let mut rng1 = SamplerRng::from_seed(7);
        let mut rng2 = SamplerRng::from_seed(7);
        let a = transform_sequence(&UniformSampler, 2, 40, &mut rng1).unwrap();
        let b = transform_sequence(&UniformSampler, 2, 40, &mut rng2).unwrap();
        assert_eq!(a, b);
    }
}
