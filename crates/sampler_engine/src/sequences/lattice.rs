//! Stratified lattice sequence source.
//!
//! The unit hypercube is partitioned into cells so that the cell count is
//! as close as possible to the requested sample count, then one jittered
//! sample is placed in every cell (stratified/jittered sampling). Unlike
//! independent uniform sampling, which can cluster, this guarantees one
//! sample per stratum.
//!
//! Cell enumeration runs through a single odometer-style Cartesian product
//! over per-dimension bin counts, so any dimension is supported.

use sampler_core::rng::SamplerRng;
use sampler_core::types::{SamplerError, Sequence};

use crate::sequences::{check_shape, SequenceSource};

/// Partition layout policy for the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Mixed bin widths: a searched number of dimensions get `ceil(n^(1/s))`
    /// bins and the rest get `floor(n^(1/s))`, approximating the requested
    /// count tightly. The default.
    #[default]
    Hyperrectangle,
    /// Every dimension gets `floor(n^(1/s)) + 1` bins. Always produces at
    /// least the requested count, with coarser control.
    Hypercube,
    /// Let the sampler pick: resolves to [`Layout::Hyperrectangle`]
    /// whenever more than one dimension is in play (for dimension 1 the
    /// partition collapses to exactly `n` bins regardless of layout).
    Auto,
}

/// Stratified jittered-grid sampling of the unit hypercube.
///
/// Cells are enumerated from a per-dimension partition, one uniformly
/// jittered sample is placed per cell, the cell order is randomised, and
/// the result is truncated to exactly the requested count.
///
/// For dimension 1 the partition is exactly `n` bins, so the layout and
/// truncation options do not apply and the unmodified grid is returned
/// (shuffled unless ordering is disabled).
///
/// # Examples
/// ```
/// use sampler_core::rng::SamplerRng;
/// use sampler_engine::sequences::{LatticeSampler, SequenceSource};
///
/// let mut rng = SamplerRng::from_seed(42);
/// let seq = LatticeSampler::default().generate(2, 100, &mut rng).unwrap();
/// assert_eq!(seq.len(), 100);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LatticeSampler {
    /// Partition layout policy.
    layout: Layout,
    /// Whether to shuffle cell order before returning.
    randomize_order: bool,
    /// Whether to truncate the grid down to the requested count.
    exact_count: bool,
}

impl Default for LatticeSampler {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            randomize_order: true,
            exact_count: true,
        }
    }
}

impl LatticeSampler {
    /// Creates a sampler with the default options (hyperrectangle layout,
    /// randomised order, exact count).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the partition layout policy.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Enables or disables cell-order randomisation.
    ///
    /// Ordering must normally stay randomised so that any fixed consumption
    /// order downstream (e.g. pairing for Box-Muller) does not correlate
    /// with cell adjacency; disabling it is intended for tests that inspect
    /// cell bounds.
    pub fn with_randomize_order(mut self, randomize_order: bool) -> Self {
        self.randomize_order = randomize_order;
        self
    }

    /// Enables or disables truncation to the exact requested count. When
    /// disabled, the full grid is returned and may exceed the requested
    /// count.
    pub fn with_exact_count(mut self, exact_count: bool) -> Self {
        self.exact_count = exact_count;
        self
    }

    /// Computes the per-dimension bin counts for `n` samples in `s >= 2`
    /// dimensions.
    ///
    /// Hyperrectangle: searches for the smallest number `x` of "wide"
    /// dimensions (with `ceil(root)` bins, the rest `floor(root)`) such
    /// that the cell count reaches `n`; which dimensions are wide is chosen
    /// uniformly at random. Hypercube: every dimension gets
    /// `floor(root) + 1` bins.
    fn bin_counts(&self, s: usize, n: usize, rng: &mut SamplerRng) -> Vec<usize> {
        let root = (n as f64).powf(1.0 / s as f64);
        let narrow = root.floor() as usize;

        match self.layout {
            Layout::Hypercube => vec![narrow + 1; s],
            Layout::Hyperrectangle | Layout::Auto => {
                let wide = root.ceil() as usize;
                let mut x = 0;
                while x <= s {
                    let cells = wide.pow(x as u32).saturating_mul(narrow.pow((s - x) as u32));
                    if cells >= n {
                        break;
                    }
                    x += 1;
                }

                // Choose which x dimensions get the wide bin count.
                let mut dims: Vec<usize> = (0..s).collect();
                rng.shuffle(&mut dims);
                let wide_dims = &dims[..x.min(s)];

                (0..s)
                    .map(|d| if wide_dims.contains(&d) { wide } else { narrow })
                    .collect()
            }
        }
    }

    /// Enumerates every cell of the partition and places one jittered
    /// sample per cell: coordinate `d` is `(bin_index + u) / bins[d]` with
    /// an independent uniform jitter `u`.
    ///
    /// A single odometer over the per-dimension bin counts replaces any
    /// per-dimension special casing, so `s` is unbounded.
    fn jittered_cells(bins: &[usize], rng: &mut SamplerRng) -> Vec<Vec<f64>> {
        let total: usize = bins.iter().product();
        let mut points = Vec::with_capacity(total);
        if total == 0 {
            return points;
        }

        let s = bins.len();
        let mut indices = vec![0usize; s];
        loop {
            let point: Vec<f64> = indices
                .iter()
                .zip(bins)
                .map(|(&index, &count)| (index as f64 + rng.gen_uniform()) / count as f64)
                .collect();
            points.push(point);

            // Advance the odometer, last dimension fastest.
            let mut d = s;
            loop {
                if d == 0 {
                    return points;
                }
                d -= 1;
                indices[d] += 1;
                if indices[d] < bins[d] {
                    break;
                }
                indices[d] = 0;
            }
        }
    }
}

impl SequenceSource for LatticeSampler {
    fn generate(
        &self,
        s: usize,
        n: usize,
        rng: &mut SamplerRng,
    ) -> Result<Sequence, SamplerError> {
        check_shape(s, n)?;
        if n == 0 {
            return Ok(Sequence::empty(s));
        }

        // Dimension 1 collapses to exactly n bins; the layout policy and
        // exact-count truncation do not apply.
        let (bins, truncate) = if s == 1 {
            (vec![n], false)
        } else {
            (self.bin_counts(s, n, rng), self.exact_count)
        };

        let mut points = Self::jittered_cells(&bins, rng);

        if truncate && points.len() < n {
            return Err(SamplerError::LatticeUndersized {
                cells: points.len(),
                requested: n,
            });
        }

        if self.randomize_order {
            rng.shuffle(&mut points);
        }
        if truncate {
            points.truncate(n);
        }
        Sequence::new(s, points)
    }
}
