//! Ordered container for multi-dimensional sample vectors.

use crate::types::SamplerError;

/// An ordered list of sample vectors, all of the same dimension.
///
/// A `Sequence` is the common output type of every generator and transform
/// in the toolkit. Coordinates are semantically in `[0, 1)` for raw sequence
/// sources and unconstrained after a normal transform. The container is
/// immutable after construction apart from [`Sequence::truncate`], which the
/// transforms use to restore the caller's requested count.
///
/// # Invariants
/// - Every vector has length [`Sequence::dimension`].
/// - The dimension is fixed at construction and never changes.
///
/// # Examples
/// ```
/// use sampler_core::types::Sequence;
///
/// let seq = Sequence::new(2, vec![vec![0.1, 0.2], vec![0.3, 0.4]]).unwrap();
/// assert_eq!(seq.len(), 2);
/// assert_eq!(seq.dimension(), 2);
/// assert_eq!(seq[1][0], 0.3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    /// Dimension shared by every vector.
    dimension: usize,
    /// The sample vectors, in generation order.
    points: Vec<Vec<f64>>,
}

impl Sequence {
    /// Creates a sequence from pre-built vectors, validating that every
    /// vector has the stated dimension.
    ///
    /// # Errors
    /// Returns [`SamplerError::InvalidDimension`] when any vector's length
    /// differs from `dimension`.
    pub fn new(dimension: usize, points: Vec<Vec<f64>>) -> Result<Self, SamplerError> {
        for point in &points {
            if point.len() != dimension {
                return Err(SamplerError::InvalidDimension { s: point.len() });
            }
        }
        Ok(Self { dimension, points })
    }

    /// Creates an empty sequence of the given dimension.
    pub fn empty(dimension: usize) -> Self {
        Self {
            dimension,
            points: Vec::new(),
        }
    }

    /// Returns the number of vectors in the sequence.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the sequence holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the dimension shared by every vector.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the vectors as a slice.
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Returns the vector at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.points.get(index).map(Vec::as_slice)
    }

    /// Iterates over the vectors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<f64>> {
        self.points.iter()
    }

    /// Collects coordinate `index` of every vector into a new column.
    ///
    /// Useful for feeding a single dimension into a one-dimensional
    /// statistic.
    ///
    /// # Panics
    /// Panics when `index >= self.dimension()`.
    pub fn column(&self, index: usize) -> Vec<f64> {
        assert!(index < self.dimension, "column {} out of range", index);
        self.points.iter().map(|p| p[index]).collect()
    }

    /// Shortens the sequence to at most `n` vectors, dropping the rest.
    pub fn truncate(&mut self, n: usize) {
        self.points.truncate(n);
    }

    /// Consumes the sequence, returning the raw vectors.
    pub fn into_points(self) -> Vec<Vec<f64>> {
        self.points
    }
}

impl std::ops::Index<usize> for Sequence {
    type Output = [f64];

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Vec<f64>;
    type IntoIter = std::slice::Iter<'a, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
