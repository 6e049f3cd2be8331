//! # Pairscope Data Provider
//!
//! The data-acquisition boundary of the system. The analytics core only ever
//! sees `TimeSeries` values; where they come from is this crate's problem.
//!
//! ## Architectural Principles
//!
//! - **Swappable Source:** The `PriceProvider` trait is the contract the
//!   application programs against, so the bundled mock generator can be
//!   replaced by a real market-data client without touching the core.
//! - **Outside the Core:** All acquisition happens before analysis starts;
//!   the engines never call back into this crate.
//!
//! ## Public API
//!
//! - `PriceProvider`: the abstract daily-price source.
//! - `MockProvider`: a seeded geometric random walk, the default source.
//! - `ProviderError`: the specific error types that can be returned from this crate.

use chrono::NaiveDate;
use core_types::TimeSeries;

pub mod error;
pub mod mock;

// Re-export the key components to create a clean, public-facing API.
pub use error::ProviderError;
pub use mock::MockProvider;

/// The generic, abstract interface for a daily price source.
///
/// Implementations return already-cleaned, gap-free daily closes over the
/// inclusive `[start, end]` range; the analytics core does no resampling or
/// imputation of its own.
pub trait PriceProvider {
    fn daily_prices(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries, ProviderError>;
}
