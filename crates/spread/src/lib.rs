//! # Pairscope Spread Engine
//!
//! This crate derives the spread between two aligned price series and detects
//! the days on which that spread is wide enough to trade.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   data sources or presentation. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `SpreadEngine` is a stateless calculator.
//!   Every call recomputes its result from the inputs alone, which makes it
//!   trivially safe to run concurrently and easy to test.
//!
//! ## Public API
//!
//! - `SpreadEngine`: the calculator for spreads, opportunities, and pair metrics.
//! - `Opportunity`: one threshold-clearing day with its cost/return breakdown.
//! - `PairMetrics`: the flat per-pair summary record.
//! - `SpreadError`: the specific error types that can be returned from this crate.

pub mod engine;
pub mod error;
pub mod types;

// Re-export the key components to create a clean, public-facing API.
pub use engine::SpreadEngine;
pub use error::SpreadError;
pub use types::{Opportunity, PairMetrics};
