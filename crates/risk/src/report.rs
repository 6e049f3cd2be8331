use serde::{Deserialize, Serialize};

/// Risk summary derived from the percentage returns of a series.
///
/// All monetary fields inherit the sign of the position size; a short
/// (negative) position flips Value-at-Risk and position risk accordingly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Sample standard deviation of daily returns.
    pub daily_volatility: f64,
    /// Daily volatility scaled by the square root of 252 trading days.
    pub annualized_volatility: f64,
    /// Empirical-percentile VaR of the return distribution, scaled by the
    /// position size.
    pub value_at_risk: f64,
    /// Worst peak-to-trough decline of the cumulative return curve; never
    /// positive.
    pub max_drawdown: f64,
    /// Position size times daily volatility.
    pub position_risk: f64,
}

/// Symmetric stop-loss / take-profit levels around the current value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopLevels {
    pub stop_loss: f64,
    pub take_profit: f64,
}
