//! Numeric primitives shared by the summarization engines.
//!
//! All functions are total over `f64`: degenerate input (empty slices, too
//! few points, zero variance) yields NaN rather than an error, and NaN in
//! the input propagates to the output.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (N-1 denominator). NaN for fewer than 2 points.
pub fn sample_std(values: &[f64]) -> f64 {
    sample_std_with_mean(values, mean(values))
}

/// Sample standard deviation around an already-computed mean.
pub fn sample_std_with_mean(values: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_sq / (values.len() as f64 - 1.0)).sqrt()
}

/// Empirical quantile with linear interpolation between order statistics.
///
/// `q` is a fraction in `[0, 1]`. Any NaN in the input leaves the quantile
/// undefined, as does an empty slice.
pub fn percentile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() || values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let rank = (sorted.len() - 1) as f64 * q;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Bias-adjusted sample skewness (adjusted Fisher-Pearson, the pandas
/// convention). NaN for fewer than 3 points or zero variance.
pub fn skewness(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 3 {
        return f64::NAN;
    }
    let n_f = n as f64;
    let mean = mean(values);
    let std = sample_std_with_mean(values, mean);
    let sum_cubed: f64 = values.iter().map(|v| (v - mean).powi(3)).sum();
    (n_f / ((n_f - 1.0) * (n_f - 2.0))) * sum_cubed / std.powi(3)
}

/// Bias-adjusted excess kurtosis (the pandas convention): 0 for a normal
/// distribution. NaN for fewer than 4 points or zero variance.
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 4 {
        return f64::NAN;
    }
    let n_f = n as f64;
    let mean = mean(values);
    let std = sample_std_with_mean(values, mean);
    let sum_quartic: f64 = values.iter().map(|v| (v - mean).powi(4)).sum();

    let lead = n_f * (n_f + 1.0) / ((n_f - 1.0) * (n_f - 2.0) * (n_f - 3.0));
    let correction = 3.0 * (n_f - 1.0) * (n_f - 1.0) / ((n_f - 2.0) * (n_f - 3.0));
    lead * sum_quartic / std.powi(4) - correction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_sample_std() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(mean(&values), 3.0);
        assert!((sample_std(&values) - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        // rank = 4 * 0.95 = 3.8 -> between the 4th and 5th order statistics.
        assert!((percentile(&values, 0.95) - 4.8).abs() < 1e-12);
        assert!((percentile(&values, 0.05) - 1.2).abs() < 1e-12);
        assert_eq!(percentile(&values, 0.5), 3.0);
        assert_eq!(percentile(&values, 0.0), 1.0);
        assert_eq!(percentile(&values, 1.0), 5.0);
    }

    #[test]
    fn percentile_is_undefined_with_nan_input() {
        assert!(percentile(&[1.0, f64::NAN], 0.5).is_nan());
        assert!(percentile(&[], 0.5).is_nan());
    }

    #[test]
    fn shape_statistics_match_known_values() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        // Symmetric input: no skew, platykurtic.
        assert!(skewness(&values).abs() < 1e-12);
        assert!((excess_kurtosis(&values) - (-1.2)).abs() < 1e-12);
    }

    #[test]
    fn shape_statistics_undefined_below_minimum_length() {
        assert!(skewness(&[1.0, 2.0]).is_nan());
        assert!(excess_kurtosis(&[1.0, 2.0, 3.0]).is_nan());
    }
}
