//! # Pairscope Pair Analyzer
//!
//! The orchestrator that turns two raw price series into one decision-support
//! bundle. This crate is the sole entry point external callers use; the
//! engines underneath stay composable and individually testable.
//!
//! ## Architectural Principles
//!
//! - **Composition Only:** The analyzer sequences the spread, statistics, and
//!   risk engines and assembles their outputs. It performs no numeric work of
//!   its own and introduces no new error kinds.
//! - **All-or-Nothing:** Any engine failure aborts the whole call; there is
//!   no partial `AnalysisResult`.
//!
//! ## Public API
//!
//! - `PairAnalyzer`: the orchestrator, configured once with `AnalysisSettings`.
//! - `AnalysisResult`: the immutable bundle of everything one run produces.
//! - `AnalyzerError`: the composed error type.

use configuration::AnalysisSettings;
use core_types::TimeSeries;
use risk::{RiskEngine, RiskMetrics, StopLevels};
use serde::{Deserialize, Serialize};
use spread::{Opportunity, PairMetrics, SpreadEngine};
use statistics::{DescriptiveStats, RollingStats, StatisticsEngine};

pub mod error;

pub use error::AnalyzerError;

/// Everything a single pair analysis produces, in one immutable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The derived spread series the other fields are computed from.
    pub spread: TimeSeries,
    pub metrics: PairMetrics,
    pub descriptive: DescriptiveStats,
    pub rolling: RollingStats,
    pub risk: RiskMetrics,
    pub stop_levels: StopLevels,
    pub opportunities: Vec<Opportunity>,
}

/// The orchestrator for a full pair analysis.
///
/// Holds the run configuration and the three stateless engines; safe to call
/// concurrently from multiple threads since nothing here mutates.
#[derive(Debug)]
pub struct PairAnalyzer {
    settings: AnalysisSettings,
    spread_engine: SpreadEngine,
    statistics_engine: StatisticsEngine,
    risk_engine: RiskEngine,
}

impl PairAnalyzer {
    /// Creates a new `PairAnalyzer` with the given run configuration.
    pub fn new(settings: AnalysisSettings) -> Self {
        Self {
            settings,
            spread_engine: SpreadEngine::new(),
            statistics_engine: StatisticsEngine::new(),
            risk_engine: RiskEngine::new(),
        }
    }

    /// Runs the full pipeline for one pair of aligned price series.
    ///
    /// The flow is one-way: the two inputs become a spread, the spread feeds
    /// both summarization engines, and the pieces are assembled into an
    /// `AnalysisResult`. Stop levels are anchored at the spread's most recent
    /// value with its descriptive standard deviation as the volatility.
    pub fn analyze(
        &self,
        series_a: &TimeSeries,
        series_b: &TimeSeries,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let s = &self.settings;
        tracing::info!(
            points = series_a.len(),
            min_spread = s.min_spread,
            window = s.rolling_window,
            "Starting pair analysis"
        );

        let spread = self.spread_engine.compute_spread(series_a, series_b)?;
        let opportunities =
            self.spread_engine
                .find_opportunities(&spread, s.min_spread, s.cost_per_leg)?;
        let metrics = self
            .spread_engine
            .pair_metrics(series_a, series_b, &spread, &opportunities);

        let descriptive = self.statistics_engine.descriptive_stats(&spread)?;
        let rolling = self.statistics_engine.rolling_stats_with_bands(
            &spread,
            s.rolling_window,
            s.band_multiple,
        )?;

        let risk = self
            .risk_engine
            .risk_metrics(&spread, s.position_size, s.confidence_level)?;

        // descriptive_stats already guaranteed at least two points, so the
        // series has a last value; NaN would only stand in for an impossible
        // empty spread and flows through harmlessly.
        let current = spread.last().map(|(_, v)| v).unwrap_or(f64::NAN);
        let stop_levels = self
            .risk_engine
            .stop_levels(current, descriptive.std, s.risk_multiple);

        tracing::info!(
            opportunities = opportunities.len(),
            mean_spread = metrics.mean_spread,
            "Pair analysis complete"
        );

        Ok(AnalysisResult {
            spread,
            metrics,
            descriptive,
            rolling,
            risk,
            stop_levels,
            opportunities,
        })
    }
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
                    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap() + chrono::Days::new(i as u64),
                    *v,
                )
            })
            .collect();
        TimeSeries::new(points).unwrap()
    }

    fn settings(window: usize) -> AnalysisSettings {
        AnalysisSettings {
            min_spread: 1.0,
            cost_per_leg: 0.25,
            position_size: 1000.0,
            rolling_window: window,
            confidence_level: 0.95,
            risk_multiple: 2.0,
            band_multiple: 2.0,
        }
    }

    #[test]
    fn full_pipeline_assembles_a_consistent_bundle() {
        let a = series(&[100.0, 102.5, 101.0, 104.0, 103.0, 106.5, 105.0, 108.0]);
        let b = series(&[99.0, 100.0, 100.5, 101.0, 102.0, 103.0, 103.5, 104.0]);
        let analyzer = PairAnalyzer::new(settings(3));

        let result = analyzer.analyze(&a, &b).unwrap();

        assert_eq!(result.spread.len(), a.len());
        assert_eq!(result.rolling.len(), a.len());
        assert_eq!(result.rolling.window, 3);
        assert_eq!(result.metrics.opportunity_count, result.opportunities.len());
        for o in &result.opportunities {
            assert!(o.spread_value >= 1.0);
        }
        assert!(result.risk.max_drawdown <= 0.0);

        // Stop levels anchor at the last spread value with the descriptive std.
        let (_, last) = result.spread.last().unwrap();
        assert_eq!(result.stop_levels.stop_loss, last - 2.0 * result.descriptive.std);
        assert_eq!(result.stop_levels.take_profit, last + 2.0 * result.descriptive.std);
    }

    #[test]
    fn misalignment_aborts_the_whole_call() {
        let a = series(&[100.0, 101.0, 102.0]);
        let b = series(&[99.0, 100.0]);
        let analyzer = PairAnalyzer::new(settings(2));
        assert!(matches!(
            analyzer.analyze(&a, &b),
            Err(AnalyzerError::Spread(spread::SpreadError::Misaligned(_)))
        ));
    }

    #[test]
    fn oversized_window_surfaces_the_statistics_error() {
        let a = series(&[100.0, 101.0, 102.0]);
        let b = series(&[99.0, 100.0, 101.0]);
        let analyzer = PairAnalyzer::new(settings(10));
        assert!(matches!(
            analyzer.analyze(&a, &b),
            Err(AnalyzerError::Statistics(
                statistics::StatisticsError::InvalidParameter(_)
            ))
        ));
    }
}
