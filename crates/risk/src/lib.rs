//! # Pairscope Risk Engine
//!
//! This crate derives percentage returns from a series and condenses them
//! into the risk numbers a trader acts on: volatility, Value-at-Risk,
//! maximum drawdown, and stop levels.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends on
//!   `core-types` for the data model and on `statistics` for the shared
//!   numeric primitives; nothing else.
//! - **Stateless Calculation:** The `RiskEngine` holds no state between
//!   calls and performs no I/O.
//!
//! ## Public API
//!
//! - `RiskEngine`: the calculator for returns, risk metrics, and stop levels.
//! - `RiskMetrics` / `StopLevels`: the result records.
//! - `RiskError`: the specific error types that can be returned from this crate.

pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::RiskEngine;
pub use error::RiskError;
pub use report::{RiskMetrics, StopLevels};
