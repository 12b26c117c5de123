//! Scalar function sampling for plotting and tabulation.
//!
//! The [`SampledFunction`] trait is the interface between the numeric models
//! and anything that wants (x, y) arrays from them: one required evaluation
//! method plus default-provided bulk operations, mirroring how a plot or a
//! table consumes a curve.

use serde::{Deserialize, Serialize};

use crate::error::PhotometryError;

/// Ordered (x, y) sample arrays produced by sampling a function.
///
/// The two vectors always have equal length, and the x values ascend by the
/// spacing the caller requested. A `SampleSet` is a transient value,
/// recomputed for every request and owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    /// Domain samples, ascending.
    pub xs: Vec<f64>,
    /// One function evaluation per element of `xs`, same order.
    pub ys: Vec<f64>,
}

impl SampleSet {
    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over (x, y) pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// A real-valued function of one real variable that can be sampled.
///
/// Implementations provide [`value_at`](SampledFunction::value_at); the bulk
/// operations are derived from it and preserve input order exactly.
pub trait SampledFunction {
    /// Evaluate the function at a single input.
    fn value_at(&self, x: f64) -> Result<f64, PhotometryError>;

    /// Evaluate the function at each input, preserving order and length.
    ///
    /// Fails on the first input the function rejects; no partial result is
    /// returned.
    fn values(&self, xs: &[f64]) -> Result<Vec<f64>, PhotometryError> {
        xs.iter().map(|&x| self.value_at(x)).collect()
    }

    /// Sample the function over `[start, end]` at a fixed spacing.
    ///
    /// The domain sequence begins at `start` and advances by `spacing` until
    /// a value at or beyond `end` has been produced. That boundary-crossing
    /// value is included, so the last sample may exceed `end` by up to one
    /// spacing. A degenerate range with `start == end` yields exactly one
    /// point.
    ///
    /// # Errors
    /// Rejects non-finite bounds, `start > end`, and spacings that are not
    /// strictly positive (the walk would never advance or never terminate).
    /// Evaluation errors from the underlying function propagate unchanged.
    fn sample_over(
        &self,
        start: f64,
        end: f64,
        spacing: f64,
    ) -> Result<SampleSet, PhotometryError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PhotometryError::NonFiniteRange { start, end });
        }
        if start > end {
            return Err(PhotometryError::InvertedRange { start, end });
        }
        if !(spacing > 0.0) || !spacing.is_finite() {
            return Err(PhotometryError::NonPositiveSpacing(spacing));
        }

        let mut xs = vec![start];
        let mut x = start;
        while x < end {
            x += spacing;
            xs.push(x);
        }
        let ys = self.values(&xs)?;

        Ok(SampleSet { xs, ys })
    }
}
