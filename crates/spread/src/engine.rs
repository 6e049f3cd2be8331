use crate::error::SpreadError;
use crate::types::{Opportunity, PairMetrics};
use core_types::TimeSeries;

/// A stateless calculator for spread derivation and opportunity detection.
#[derive(Debug, Default)]
pub struct SpreadEngine {}

impl SpreadEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the absolute spread `|a - b|` over the shared date index,
    /// rounded to two decimal places.
    ///
    /// Both series must be aligned (identical date indexes); misaligned
    /// inputs fail fast rather than being truncated or resampled.
    pub fn compute_spread(
        &self,
        a: &TimeSeries,
        b: &TimeSeries,
    ) -> Result<TimeSeries, SpreadError> {
        ensure_aligned(a, b)?;

        let values = a
            .values()
            .zip(b.values())
            .map(|(x, y)| round_to_cents((x - y).abs()))
            .collect();

        Ok(a.with_values(values)?)
    }

    /// Selects the days on which the spread reached `min_threshold` and
    /// attaches the cost/return breakdown to each.
    ///
    /// The threshold boundary is inclusive. A spread with no qualifying day
    /// yields an empty vector, not an error.
    pub fn find_opportunities(
        &self,
        spread: &TimeSeries,
        min_threshold: f64,
        cost_per_leg: f64,
    ) -> Result<Vec<Opportunity>, SpreadError> {
        if !(min_threshold > 0.0) {
            return Err(SpreadError::InvalidParameter(format!(
                "min_threshold must be greater than 0, got {min_threshold}"
            )));
        }
        if !(cost_per_leg >= 0.0) {
            return Err(SpreadError::InvalidParameter(format!(
                "cost_per_leg must not be negative, got {cost_per_leg}"
            )));
        }

        let total_cost = cost_per_leg * 2.0;
        let opportunities: Vec<Opportunity> = spread
            .points()
            .iter()
            .filter(|(_, value)| *value >= min_threshold)
            .map(|&(date, spread_value)| {
                let gross_return = spread_value - min_threshold / 2.0;
                Opportunity {
                    date,
                    spread_value,
                    gross_return,
                    total_cost,
                    net_return: gross_return - total_cost,
                }
            })
            .collect();

        tracing::debug!(
            threshold = min_threshold,
            count = opportunities.len(),
            "Selected spread opportunities"
        );

        Ok(opportunities)
    }

    /// Aggregates the flat summary record for a pair.
    ///
    /// Assumes `a`, `b` and `spread` share one date index (the orchestrator
    /// guarantees this by construction). Total: an empty opportunity set maps
    /// to zero returns, and degenerate inputs surface as NaN rather than
    /// errors.
    pub fn pair_metrics(
        &self,
        a: &TimeSeries,
        b: &TimeSeries,
        spread: &TimeSeries,
        opportunities: &[Opportunity],
    ) -> PairMetrics {
        let n = spread.len();
        let mean_spread = spread.values().sum::<f64>() / n as f64;
        // f64::max ignores NaN, so the maximum skips undefined points and is
        // NaN only when the series has no defined value at all.
        let max_spread = spread.values().fold(f64::NAN, f64::max);

        let (mean_net_return, total_net_return) = if opportunities.is_empty() {
            (0.0, 0.0)
        } else {
            let total: f64 = opportunities.iter().map(|o| o.net_return).sum();
            (total / opportunities.len() as f64, total)
        };

        PairMetrics {
            mean_spread,
            max_spread,
            opportunity_count: opportunities.len(),
            mean_net_return,
            total_net_return,
            correlation: pearson_pairwise_complete(a, b),
        }
    }
}

fn ensure_aligned(a: &TimeSeries, b: &TimeSeries) -> Result<(), SpreadError> {
    if a.is_aligned_with(b) {
        return Ok(());
    }
    let detail = if a.len() != b.len() {
        format!("left has {} points, right has {}", a.len(), b.len())
    } else {
        "same length but differing date indexes".to_string()
    };
    Err(SpreadError::Misaligned(detail))
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pearson correlation over the pairs where both observations are finite.
///
/// Fewer than two complete pairs, or zero variance on either side, leaves the
/// coefficient undefined (NaN).
fn pearson_pairwise_complete(a: &TimeSeries, b: &TimeSeries) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .values()
        .zip(b.values())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    sxy / (sxx * syy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> TimeSeries {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                (
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64),
                    *v,
                )
            })
            .collect();
        TimeSeries::new(points).unwrap()
    }

    #[test]
    fn spread_is_symmetric_nonnegative_and_rounded() {
        let engine = SpreadEngine::new();
        let a = series(&[10.123, 12.5, 9.0]);
        let b = series(&[11.0, 10.004, 9.5]);

        let ab = engine.compute_spread(&a, &b).unwrap();
        let ba = engine.compute_spread(&b, &a).unwrap();

        assert_eq!(ab, ba);
        for value in ab.values() {
            assert!(value >= 0.0);
            // Exactly two decimals survive the rounding.
            assert!((value * 100.0 - (value * 100.0).round()).abs() < 1e-9);
        }
        assert_eq!(ab.values().collect::<Vec<_>>(), vec![0.88, 2.5, 0.5]);
    }

    #[test]
    fn misaligned_series_fail_fast() {
        let engine = SpreadEngine::new();
        let a = series(&[1.0, 2.0, 3.0]);
        let b = series(&[1.0, 2.0]);
        assert!(matches!(
            engine.compute_spread(&a, &b),
            Err(SpreadError::Misaligned(_))
        ));
    }

    #[test]
    fn opportunities_honor_the_inclusive_threshold() {
        let engine = SpreadEngine::new();
        let spread = series(&[0.5, 1.2, 1.0, 2.5]);

        let opportunities = engine.find_opportunities(&spread, 1.0, 5.0).unwrap();

        assert_eq!(opportunities.len(), 3);
        for o in &opportunities {
            assert!(o.spread_value >= 1.0);
            assert_eq!(o.total_cost, 10.0);
        }
        let nets: Vec<f64> = opportunities.iter().map(|o| o.net_return).collect();
        assert!((nets[0] - (-9.3)).abs() < 1e-12);
        assert!((nets[1] - (-9.5)).abs() < 1e-12);
        assert!((nets[2] - (-8.0)).abs() < 1e-12);
    }

    #[test]
    fn no_qualifying_day_yields_an_empty_set() {
        let engine = SpreadEngine::new();
        let spread = series(&[0.1, 0.2, 0.3]);
        let opportunities = engine.find_opportunities(&spread, 1.0, 5.0).unwrap();
        assert!(opportunities.is_empty());
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let engine = SpreadEngine::new();
        let spread = series(&[1.0, 2.0]);
        assert!(matches!(
            engine.find_opportunities(&spread, 0.0, 5.0),
            Err(SpreadError::InvalidParameter(_))
        ));
        assert!(matches!(
            engine.find_opportunities(&spread, 1.0, -0.5),
            Err(SpreadError::InvalidParameter(_))
        ));
    }

    #[test]
    fn empty_opportunity_set_keeps_returns_at_zero() {
        let engine = SpreadEngine::new();
        let a = series(&[10.0, 10.1, 10.2]);
        let b = series(&[10.0, 10.0, 10.1]);
        let spread = engine.compute_spread(&a, &b).unwrap();

        let metrics = engine.pair_metrics(&a, &b, &spread, &[]);

        assert_eq!(metrics.opportunity_count, 0);
        assert_eq!(metrics.mean_net_return, 0.0);
        assert_eq!(metrics.total_net_return, 0.0);
        assert!(!metrics.mean_net_return.is_nan());
    }

    #[test]
    fn perfectly_linear_series_correlate_to_one() {
        let engine = SpreadEngine::new();
        let a = series(&[1.0, 2.0, 3.0, 4.0]);
        let b = series(&[2.0, 4.0, 6.0, 8.0]);
        let spread = engine.compute_spread(&a, &b).unwrap();
        let metrics = engine.pair_metrics(&a, &b, &spread, &[]);
        assert!((metrics.correlation - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_skips_non_finite_pairs() {
        let engine = SpreadEngine::new();
        let a = series(&[1.0, f64::NAN, 3.0, 4.0]);
        let b = series(&[2.0, 5.0, 6.0, 8.0]);
        let spread = series(&[0.0, 0.0, 0.0, 0.0]);
        let metrics = engine.pair_metrics(&a, &b, &spread, &[]);
        // Pairwise-complete over the three finite pairs, which are collinear.
        assert!((metrics.correlation - 1.0).abs() < 1e-9);
    }
}
