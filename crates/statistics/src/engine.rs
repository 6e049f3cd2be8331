use crate::error::StatisticsError;
use crate::math;
use crate::report::{DescriptiveStats, RollingStats};
use core_types::TimeSeries;

/// A stateless calculator for distributional and rolling-window statistics.
#[derive(Debug, Default)]
pub struct StatisticsEngine {}

impl StatisticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the standard sample statistics of a series.
    ///
    /// Requires at least two points, since the sample standard deviation is
    /// undefined below that. Skewness and kurtosis need three and four points
    /// respectively; on shorter input they come back NaN rather than failing
    /// the whole summary.
    pub fn descriptive_stats(
        &self,
        series: &TimeSeries,
    ) -> Result<DescriptiveStats, StatisticsError> {
        let n = series.len();
        if n < 2 {
            return Err(StatisticsError::InsufficientData {
                required: 2,
                actual: n,
            });
        }

        let values: Vec<f64> = series.values().collect();
        let mean = math::mean(&values);
        let std = math::sample_std_with_mean(&values, mean);

        let z_scores = series.with_values(values.iter().map(|v| (v - mean) / std).collect())?;

        Ok(DescriptiveStats {
            mean,
            std,
            z_scores,
            percentile_95: math::percentile(&values, 0.95),
            percentile_5: math::percentile(&values, 0.05),
            skewness: math::skewness(&values),
            kurtosis: math::excess_kurtosis(&values),
        })
    }

    /// Computes trailing-window statistics with the standard two-sigma bands.
    pub fn rolling_stats(
        &self,
        series: &TimeSeries,
        window: usize,
    ) -> Result<RollingStats, StatisticsError> {
        self.rolling_stats_with_bands(series, window, 2.0)
    }

    /// Computes trailing-window statistics with a configurable band width.
    ///
    /// Each row summarizes itself and the preceding `window - 1` rows; the
    /// warm-up rows are NaN. `window` must satisfy `1 <= window <= len`.
    /// A window of 1 degenerates to the series itself with zero deviation.
    pub fn rolling_stats_with_bands(
        &self,
        series: &TimeSeries,
        window: usize,
        band_multiple: f64,
    ) -> Result<RollingStats, StatisticsError> {
        let n = series.len();
        if window < 1 || window > n {
            return Err(StatisticsError::InvalidParameter(format!(
                "window must be between 1 and the series length ({n}), got {window}"
            )));
        }

        let values: Vec<f64> = series.values().collect();
        let mut rolling_mean = vec![f64::NAN; n];
        let mut rolling_std = vec![f64::NAN; n];
        let mut upper_band = vec![f64::NAN; n];
        let mut lower_band = vec![f64::NAN; n];

        for i in (window - 1)..n {
            let slice = &values[i + 1 - window..=i];
            let mean = math::mean(slice);
            let std = if window == 1 {
                0.0
            } else {
                math::sample_std_with_mean(slice, mean)
            };
            rolling_mean[i] = mean;
            rolling_std[i] = std;
            upper_band[i] = mean + band_multiple * std;
            lower_band[i] = mean - band_multiple * std;
        }

        tracing::debug!(window, points = n, "Computed rolling statistics");

        Ok(RollingStats {
            dates: series.dates().collect(),
            rolling_mean,
            rolling_std,
            upper_band,
            lower_band,
            window,
        })
    }
}
