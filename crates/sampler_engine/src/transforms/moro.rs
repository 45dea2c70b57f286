//! Beasley-Springer-Moro normal transform.
//!
//! A closed-form rational approximation to the inverse standard-normal
//! CDF: a degree-3/degree-4 rational polynomial in the central region and
//! Moro's degree-8 tail polynomial elsewhere. Relative error is about
//! 1e-9; callers needing exact inversion must not rely on this transform.

use sampler_core::rng::SamplerRng;
use sampler_core::types::{SamplerError, Sequence};

use crate::sequences::SequenceSource;

/// Numerator coefficients of the central-region rational approximation.
const A: [f64; 4] = [
    2.50662823884,
    -18.61500062529,
    41.39119773534,
    -25.44106049637,
];

/// Denominator coefficients of the central-region rational approximation.
const B: [f64; 4] = [
    -8.47351093090,
    23.08336743743,
    -21.06224101826,
    3.13082909833,
];

/// Moro's tail polynomial coefficients.
const C: [f64; 9] = [
    0.3374754822726147,
    0.9761690190917186,
    0.1607979714918209,
    0.0276438810333863,
    0.0038405729373609,
    0.0003951896511919,
    0.0000321767881768,
    0.0000002888167364,
    0.0000003960315187,
];

/// Boundary between the central rational approximation and the tail
/// polynomial, in terms of `|u - 0.5|`.
const CENTRAL_REGION: f64 = 0.42;

/// Approximates the inverse standard-normal CDF at `u`.
///
/// For `|u - 0.5| < 0.42` a rational polynomial in `(u - 0.5)^2` is used;
/// otherwise Moro's polynomial in `ln(-ln(min(u, 1 - u)))`, negated on the
/// lower tail. Monotonically increasing in `u` over `(0, 1)`.
///
/// # Errors
/// Returns [`SamplerError::DomainError`] when `u` lies outside the open
/// interval `(0, 1)`.
///
/// # Examples
/// ```
/// use sampler_engine::transforms::moro::transform_scalar;
///
/// assert!(transform_scalar(0.5).unwrap().abs() < 1e-9);
/// assert!((transform_scalar(0.975).unwrap() - 1.96).abs() < 1e-2);
/// ```
pub fn transform_scalar(u: f64) -> Result<f64, SamplerError> {
    if !(u > 0.0 && u < 1.0) {
        return Err(SamplerError::DomainError { value: u });
    }

    let y = u - 0.5;
    if y.abs() < CENTRAL_REGION {
        let r = y * y;
        let numerator = y * (((A[3] * r + A[2]) * r + A[1]) * r + A[0]);
        let denominator = (((B[3] * r + B[2]) * r + B[1]) * r + B[0]) * r + 1.0;
        Ok(numerator / denominator)
    } else {
        let tail = if y > 0.0 { 1.0 - u } else { u };
        let r = (-tail.ln()).ln();
        let mut x = C[8];
        for &c in C[..8].iter().rev() {
            x = c + r * x;
        }
        Ok(if y < 0.0 { -x } else { x })
    }
}

/// Draws a uniform sequence from `source` and applies
/// [`transform_scalar`] to every coordinate of every vector.
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
    let uniforms = source.generate(s, n, rng)?;

    let mut points = Vec::with_capacity(n);
    for row in &uniforms {
        let point: Vec<f64> = row
            .iter()
            .map(|&u| transform_scalar(u))
            .collect::<Result<_, _>>()?;
        points.push(point);
    }
    Sequence::new(s, points)
}
