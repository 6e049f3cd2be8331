use thiserror::Error;

/// Failures surfaced by the orchestrator.
///
/// This enum only composes the engine errors; the orchestrator itself adds
/// no failure modes of its own, so every variant carries the originating
/// error unchanged.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Spread computation failed: {0}")]
    Spread(#[from] spread::SpreadError),

    #[error("Statistics computation failed: {0}")]
    Statistics(#[from] statistics::StatisticsError),

    #[error("Risk computation failed: {0}")]
    Risk(#[from] risk::RiskError),
}
