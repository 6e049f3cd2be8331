use crate::error::ProviderError;
use crate::PriceProvider;
use chrono::{Days, NaiveDate};
use configuration::ProviderSettings;
use core_types::TimeSeries;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A seeded geometric random walk standing in for a real market-data feed.
///
/// Each ticker gets its own reproducible walk: the configured seed is mixed
/// with a hash of the ticker, so "PETR3" and "PETR4" diverge while any single
/// ticker stays deterministic across calls. Calendar days are generated
/// without gaps, matching the gap-free daily input the core assumes.
#[derive(Debug, Clone)]
pub struct MockProvider {
    settings: ProviderSettings,
}

impl MockProvider {
    /// Creates a provider with the given walk parameters, validating that a
    /// return distribution can actually be built from them.
    pub fn new(settings: ProviderSettings) -> Result<Self, ProviderError> {
        if !(settings.volatility >= 0.0) {
            return Err(ProviderError::InvalidParameter(format!(
                "volatility must not be negative, got {}",
                settings.volatility
            )));
        }
        if !(settings.base_price > 0.0) {
            return Err(ProviderError::InvalidParameter(format!(
                "base_price must be greater than 0, got {}",
                settings.base_price
            )));
        }
        Ok(Self { settings })
    }

    fn rng_for(&self, ticker: &str) -> StdRng {
        let mut hasher = DefaultHasher::new();
        ticker.hash(&mut hasher);
        StdRng::seed_from_u64(self.settings.seed ^ hasher.finish())
    }
}

impl PriceProvider for MockProvider {
    fn daily_prices(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries, ProviderError> {
        if start > end {
            return Err(ProviderError::InvalidRange { start, end });
        }

        let returns = Normal::new(self.settings.drift, self.settings.volatility)
            .map_err(|e| ProviderError::InvalidParameter(e.to_string()))?;

        let mut rng = self.rng_for(ticker);
        let mut price = self.settings.base_price;
        let mut points = Vec::new();
        let mut date = start;
        loop {
            price *= 1.0 + returns.sample(&mut rng);
            points.push((date, price));
            if date == end {
                break;
            }
            date = date + Days::new(1);
        }

        tracing::debug!(
            ticker,
            %start,
            %end,
            points = points.len(),
            "Generated mock daily prices"
        );

        Ok(TimeSeries::new(points)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MockProvider {
        MockProvider::new(ProviderSettings::default()).unwrap()
    }

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn generates_one_point_per_calendar_day_inclusive() {
        let series = provider()
            .daily_prices("PETR3", d(2024, 1, 1), d(2024, 1, 31))
            .unwrap();
        assert_eq!(series.len(), 31);
        assert_eq!(series.dates().next().unwrap(), d(2024, 1, 1));
        assert_eq!(series.last().unwrap().0, d(2024, 1, 31));
    }

    #[test]
    fn same_ticker_is_deterministic_different_tickers_diverge() {
        let p = provider();
        let first = p.daily_prices("PETR3", d(2024, 1, 1), d(2024, 3, 1)).unwrap();
        let again = p.daily_prices("PETR3", d(2024, 1, 1), d(2024, 3, 1)).unwrap();
        let other = p.daily_prices("PETR4", d(2024, 1, 1), d(2024, 3, 1)).unwrap();

        assert_eq!(first, again);
        assert!(first.is_aligned_with(&other));
        assert_ne!(first, other);
    }

    #[test]
    fn generated_prices_stay_finite() {
        let series = provider()
            .daily_prices("VALE3", d(2023, 1, 1), d(2024, 1, 1))
            .unwrap();
        assert!(series.values().all(f64::is_finite));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = provider()
            .daily_prices("PETR3", d(2024, 2, 1), d(2024, 1, 1))
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidRange { .. }));
    }

    #[test]
    fn single_day_range_yields_one_point() {
        let series = provider()
            .daily_prices("PETR3", d(2024, 1, 5), d(2024, 1, 5))
            .unwrap();
        assert_eq!(series.len(), 1);
    }
}
