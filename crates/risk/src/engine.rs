use crate::error::RiskError;
use crate::report::{RiskMetrics, StopLevels};
use core_types::TimeSeries;
use statistics::math;

/// Trading days per year, used to annualize daily volatility.
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// A stateless calculator for return-based risk metrics.
#[derive(Debug, Default)]
pub struct RiskEngine {}

impl RiskEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Period-over-period percentage change of a series.
    ///
    /// The first observation has no predecessor and is dropped, so the
    /// result is one point shorter than the input and starts at the second
    /// date.
    pub fn returns(&self, series: &TimeSeries) -> Result<TimeSeries, RiskError> {
        let n = series.len();
        if n < 2 {
            return Err(RiskError::InsufficientData {
                required: 2,
                actual: n,
            });
        }

        let points = series
            .points()
            .windows(2)
            .map(|pair| (pair[1].0, pair[1].1 / pair[0].1 - 1.0))
            .collect();

        Ok(TimeSeries::new(points)?)
    }

    /// Computes volatility, Value-at-Risk, maximum drawdown, and position
    /// risk from the percentage returns of `series`.
    ///
    /// VaR is the `(1 - confidence_level)` empirical percentile of the
    /// return distribution, linearly interpolated and scaled by
    /// `position_size`. Note that when the input is a spread series, its own
    /// returns stand in for position returns; that is a volatility proxy
    /// inherited from the product definition, not a joint-exposure model of
    /// the two legs.
    ///
    /// `position_size` may be any real; its sign carries through to the
    /// monetary fields. `confidence_level` must lie strictly between 0 and 1.
    pub fn risk_metrics(
        &self,
        series: &TimeSeries,
        position_size: f64,
        confidence_level: f64,
    ) -> Result<RiskMetrics, RiskError> {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(RiskError::InvalidParameter(format!(
                "confidence_level must be strictly between 0 and 1, got {confidence_level}"
            )));
        }

        let returns = self.returns(series)?;
        let values: Vec<f64> = returns.values().collect();

        let daily_volatility = math::sample_std(&values);
        let value_at_risk = position_size * math::percentile(&values, 1.0 - confidence_level);

        tracing::debug!(
            observations = values.len(),
            daily_volatility,
            "Derived risk metrics from returns"
        );

        Ok(RiskMetrics {
            daily_volatility,
            annualized_volatility: daily_volatility * TRADING_DAYS_PER_YEAR.sqrt(),
            value_at_risk,
            max_drawdown: max_drawdown(&values),
            position_risk: position_size * daily_volatility,
        })
    }

    /// Stop-loss and take-profit levels a fixed number of volatilities away
    /// from the current value.
    ///
    /// Pure arithmetic with no failure modes: non-finite inputs flow through
    /// to the output rather than raising.
    pub fn stop_levels(
        &self,
        current_value: f64,
        volatility: f64,
        risk_multiple: f64,
    ) -> StopLevels {
        let distance = volatility * risk_multiple;
        StopLevels {
            stop_loss: current_value - distance,
            take_profit: current_value + distance,
        }
    }
}

/// Worst peak-to-trough decline of the cumulative product of `(1 + r)`.
///
/// Zero for a series that never declines from its running peak; undefined
/// points (NaN) are skipped rather than poisoning the minimum.
fn max_drawdown(returns: &[f64]) -> f64 {
    let mut cumulative = 1.0;
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0;

    for r in returns {
        cumulative *= 1.0 + r;
        if cumulative > peak {
            peak = cumulative;
        }
        let drawdown = cumulative / peak - 1.0;
        if drawdown < worst {
            worst = drawdown;
        }
    }

    worst
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
                    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() + chrono::Days::new(i as u64),
                    *v,
                )
            })
            .collect();
        TimeSeries::new(points).unwrap()
    }

    #[test]
    fn returns_drop_the_first_observation() {
        let engine = RiskEngine::new();
        let input = series(&[100.0, 102.0, 101.0, 105.0]);

        let returns = engine.returns(&input).unwrap();

        assert_eq!(returns.len(), 3);
        // Index starts at the second date of the source series.
        assert_eq!(
            returns.dates().next().unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
        );
        let values: Vec<f64> = returns.values().collect();
        assert!((values[0] - 0.02).abs() < 1e-12);
        assert!((values[1] - (101.0 / 102.0 - 1.0)).abs() < 1e-12);
        assert!((values[2] - (105.0 / 101.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn returns_need_two_points() {
        let engine = RiskEngine::new();
        assert!(matches!(
            engine.returns(&series(&[100.0])),
            Err(RiskError::InsufficientData { required: 2, .. })
        ));
    }

    #[test]
    fn risk_metrics_on_the_reference_series() {
        let engine = RiskEngine::new();
        let input = series(&[100.0, 102.0, 101.0, 105.0]);

        let metrics = engine.risk_metrics(&input, 1000.0, 0.95).unwrap();

        // VaR: interpolated 5th percentile of the three returns.
        let r = [0.02, 101.0 / 102.0 - 1.0, 105.0 / 101.0 - 1.0];
        let expected_var = 1000.0 * (r[1] + 0.1 * (r[0] - r[1]));
        assert!((metrics.value_at_risk - expected_var).abs() < 1e-9);

        // The only decline is the one down day.
        assert!((metrics.max_drawdown - (101.0 / 102.0 - 1.0)).abs() < 1e-12);

        // Annualization is exact, not approximate.
        assert_eq!(
            metrics.annualized_volatility,
            metrics.daily_volatility * 252.0_f64.sqrt()
        );
        assert!((metrics.position_risk - 1000.0 * metrics.daily_volatility).abs() < 1e-12);
    }

    #[test]
    fn max_drawdown_is_never_positive() {
        let engine = RiskEngine::new();
        let rising = series(&[1.0, 2.0, 3.0, 4.0]);
        let metrics = engine.risk_metrics(&rising, 1.0, 0.95).unwrap();
        assert_eq!(metrics.max_drawdown, 0.0);

        // The cumulative curve runs over returns, so its peak is the 95 print
        // (the initial 100 is consumed by differencing).
        let choppy = series(&[100.0, 90.0, 95.0, 80.0, 120.0]);
        let metrics = engine.risk_metrics(&choppy, 1.0, 0.95).unwrap();
        assert!(metrics.max_drawdown <= 0.0);
        assert!((metrics.max_drawdown - (80.0 / 95.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn position_sign_is_preserved() {
        let engine = RiskEngine::new();
        let input = series(&[100.0, 102.0, 101.0, 105.0]);
        let long = engine.risk_metrics(&input, 1000.0, 0.95).unwrap();
        let short = engine.risk_metrics(&input, -1000.0, 0.95).unwrap();
        assert_eq!(short.value_at_risk, -long.value_at_risk);
        assert_eq!(short.position_risk, -long.position_risk);
    }

    #[test]
    fn confidence_level_bounds_are_exclusive() {
        let engine = RiskEngine::new();
        let input = series(&[100.0, 102.0, 101.0]);
        for bad in [0.0, 1.0, -0.5, 1.5] {
            assert!(matches!(
                engine.risk_metrics(&input, 1.0, bad),
                Err(RiskError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn stop_levels_are_symmetric_and_total() {
        let engine = RiskEngine::new();
        let levels = engine.stop_levels(10.0, 0.5, 2.0);
        assert_eq!(levels.stop_loss, 9.0);
        assert_eq!(levels.take_profit, 11.0);

        // Non-finite input propagates instead of raising.
        let undefined = engine.stop_levels(f64::NAN, 0.5, 2.0);
        assert!(undefined.stop_loss.is_nan());
        assert!(undefined.take_profit.is_nan());
    }
}
