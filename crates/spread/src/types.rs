use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day on which the spread cleared the entry threshold.
///
/// The cost model is a flat round trip: each leg pays the per-operation cost
/// once to open and once to close, so `total_cost` is twice the per-leg cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub date: NaiveDate,
    /// The spread value on that day, already rounded to cents.
    pub spread_value: f64,
    /// Expected capture: the spread minus half the entry threshold.
    pub gross_return: f64,
    pub total_cost: f64,
    pub net_return: f64,
}

/// A flat summary record for one analyzed pair.
///
/// This struct is a data transfer object for the presentation layer; it is
/// derived on every analysis call and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairMetrics {
    pub mean_spread: f64,
    pub max_spread: f64,
    pub opportunity_count: usize,
    /// Mean net return across opportunities; 0.0 when there are none, so
    /// display code never has to special-case NaN.
    pub mean_net_return: f64,
    /// Total net return across opportunities; 0.0 when there are none.
    pub total_net_return: f64,
    /// Pearson correlation between the two raw price series, computed over
    /// the pairs where both values are finite.
    pub correlation: f64,
}
