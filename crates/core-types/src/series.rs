use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An ordered, date-indexed sequence of observations.
///
/// The date index is strictly increasing with no duplicates; this is enforced
/// at construction so downstream consumers can rely on it. Values are plain
/// `f64` and are deliberately *not* screened for NaN/Inf: non-finite values
/// produced by differencing or rolling warm-up stay in the index domain and
/// propagate through arithmetic per IEEE-754.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<(NaiveDate, f64)>,
}

impl TimeSeries {
    /// Builds a series from `(date, value)` points, validating the index.
    pub fn new(points: Vec<(NaiveDate, f64)>) -> Result<Self, CoreError> {
        for pair in points.windows(2) {
            let (prev, next) = (pair[0].0, pair[1].0);
            if next == prev {
                return Err(CoreError::DuplicateDate(next));
            }
            if next < prev {
                return Err(CoreError::OutOfOrder { prev, next });
            }
        }
        Ok(Self { points })
    }

    /// Builds a series over the same date index as `self` with new values.
    ///
    /// This is the cheap way for derived computations (spreads, z-scores) to
    /// inherit an already-validated index.
    pub fn with_values(&self, values: Vec<f64>) -> Result<Self, CoreError> {
        if values.len() != self.points.len() {
            return Err(CoreError::LengthMismatch {
                expected: self.points.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            points: self.dates().zip(values).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The raw `(date, value)` points in index order.
    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|(d, _)| *d)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, v)| *v)
    }

    /// The most recent observation, if any.
    pub fn last(&self) -> Option<(NaiveDate, f64)> {
        self.points.last().copied()
    }

    /// Two series are aligned when their date indexes are identical.
    ///
    /// Alignment is the precondition for every binary operation on series;
    /// callers that combine misaligned series get an error from the operation,
    /// never a silently truncated result.
    pub fn is_aligned_with(&self, other: &Self) -> bool {
        self.len() == other.len() && self.dates().eq(other.dates())
    }
}
