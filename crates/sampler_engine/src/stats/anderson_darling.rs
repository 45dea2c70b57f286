//! Anderson-Darling goodness-of-fit statistic.
//!
//! Measures how well a one-dimensional sample fits the normal
//! distribution, weighting deviations between the empirical and
//! hypothesized CDFs more heavily in the tails. Larger values indicate a
//! poorer fit.
//!
//! Conventional critical values for reference (not enforced here):
//!
//! | Significance | Critical value |
//! |--------------|----------------|
//! | 10%          | 1.760          |
//! | 5%           | 2.323          |
//! | 2.5%         | 2.904          |
//! | 1%           | 3.690          |

use sampler_core::math::distributions::norm_cdf;
use sampler_core::types::SamplerError;

/// Result of an Anderson-Darling computation.
///
/// Interpretation is left to the caller; this component returns the raw
/// statistic only, with the sample size used to compute it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AndersonDarling {
    /// The raw A statistic. Larger means a poorer fit to normality.
    pub statistic: f64,
    /// Number of observations the statistic was computed from.
    pub sample_size: usize,
}

/// Computes the Anderson-Darling statistic of `sample` against the normal
/// distribution.
///
/// The sample is sorted ascending and standardised with the population
/// (1/N) standard deviation; the centring mean defaults to the sample mean
/// but may be supplied when the true mean is known. For standardised order
/// statistics `y_1 <= ... <= y_N` the statistic is
///
/// ```text
/// A = -N - (1/N) * sum_{i=1..N} (2i - 1) * (ln F(y_i) + ln(1 - F(y_{N+1-i})))
/// ```
///
/// where `F` is the standard normal CDF. The computation is a pure
/// function of its inputs.
///
/// # Errors
/// - [`SamplerError::InvalidCount`] when the sample holds fewer than 2
///   observations.
/// - [`SamplerError::DegenerateSample`] when the standard deviation is
///   zero (all values identical), since standardisation is undefined.
///
/// # Examples
/// ```
/// use sampler_engine::stats::anderson_darling;
///
/// let sample = [-1.2, -0.4, 0.0, 0.3, 1.1];
/// let fit = anderson_darling::compute(&sample, None).unwrap();
/// assert_eq!(fit.sample_size, 5);
/// assert!(fit.statistic.is_finite());
/// ```
pub fn compute(sample: &[f64], mean: Option<f64>) -> Result<AndersonDarling, SamplerError> {
    let n = sample.len();
    if n < 2 {
        return Err(SamplerError::InvalidCount { n });
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n_f = n as f64;
    let sample_mean = sorted.iter().sum::<f64>() / n_f;
    let variance = sorted
        .iter()
        .map(|x| (x - sample_mean) * (x - sample_mean))
        .sum::<f64>()
        / n_f;
    let std = variance.sqrt();
    if std == 0.0 {
        return Err(SamplerError::DegenerateSample);
    }

    let centre = mean.unwrap_or(sample_mean);
    let y: Vec<f64> = sorted.iter().map(|x| (x - centre) / std).collect();

    let mut accum = 0.0;
    for i in 1..=n {
        let weight = (2 * i - 1) as f64;
        accum += weight * (norm_cdf(y[i - 1]).ln() + (1.0 - norm_cdf(y[n - i])).ln());
    }

    Ok(AndersonDarling {
        statistic: -n_f - accum / n_f,
        sample_size: n,
    })
}
