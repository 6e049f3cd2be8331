use chrono::NaiveDate;
use core_types::TimeSeries;
use serde::{Deserialize, Serialize};

/// Distributional summary of a single series.
///
/// This struct is the descriptive half of the `StatisticsEngine` output and
/// serves as a data transfer object for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub mean: f64,
    /// Sample standard deviation (N-1 denominator).
    pub std: f64,
    /// Elementwise `(x - mean) / std`, aligned to the source index.
    pub z_scores: TimeSeries,
    pub percentile_95: f64,
    pub percentile_5: f64,
    /// NaN when the series is too short (< 3 points) to define it.
    pub skewness: f64,
    /// Excess kurtosis; NaN when the series is too short (< 4 points).
    pub kurtosis: f64,
}

/// Trailing-window statistics with Bollinger-style bands, one row per date.
///
/// The first `window - 1` rows are NaN by construction: a trailing window
/// has nothing to summarize until it is full. That warm-up is expected and
/// is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingStats {
    pub dates: Vec<NaiveDate>,
    pub rolling_mean: Vec<f64>,
    pub rolling_std: Vec<f64>,
    pub upper_band: Vec<f64>,
    pub lower_band: Vec<f64>,
    /// The window length the table was computed with.
    pub window: usize,
}

impl RollingStats {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
