use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisSettings,
    pub provider: ProviderSettings,
}

/// Knobs for a single pair-analysis run.
///
/// These are the application-wide defaults; the CLI can override any of them
/// per invocation. Keeping them here, rather than as constants inside the
/// engines, means every tunable travels through an explicit signature.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// The minimum spread at which a day counts as a trading opportunity.
    pub min_spread: f64,
    /// Operational cost charged per leg; a round trip pays it twice.
    pub cost_per_leg: f64,
    /// Nominal position size used to scale VaR and position risk.
    pub position_size: f64,
    /// Trailing window length for rolling statistics.
    pub rolling_window: usize,
    /// Confidence level for Value-at-Risk, strictly between 0 and 1.
    pub confidence_level: f64,
    /// Multiple of volatility used for stop-loss / take-profit distances.
    pub risk_multiple: f64,
    /// Multiple of rolling std used for the upper and lower bands.
    pub band_multiple: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            min_spread: 1.0,
            cost_per_leg: 5.0,
            position_size: 1000.0,
            rolling_window: 20,
            confidence_level: 0.95,
            risk_multiple: 2.0,
            band_multiple: 2.0,
        }
    }
}

/// Parameters for the mock daily-price provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Starting price for the generated random walk.
    pub base_price: f64,
    /// Mean of the daily return distribution.
    pub drift: f64,
    /// Standard deviation of the daily return distribution.
    pub volatility: f64,
    /// Seed for deterministic generation. Mixed with the ticker so two
    /// tickers never produce the identical walk.
    pub seed: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_price: 100.0,
            drift: 0.0001,
            volatility: 0.02,
            seed: 42,
        }
    }
}
