//! # Pairscope Statistics Engine
//!
//! This crate summarizes a single series two ways: distributionally (mean,
//! spread of values, tail percentiles, shape) and over a trailing window
//! (moving mean/std with Bollinger-style bands).
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   where series come from. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `StatisticsEngine` holds no state between
//!   calls; every result is recomputed from its inputs.
//! - **Shared Primitives:** The `math` module exposes the numeric primitives
//!   (mean, sample std, interpolated percentile) so sibling crates compute
//!   them one way, not three.
//!
//! ## Public API
//!
//! - `StatisticsEngine`: the calculator for descriptive and rolling statistics.
//! - `DescriptiveStats` / `RollingStats`: the result records.
//! - `StatisticsError`: the specific error types that can be returned from this crate.

pub mod engine;
pub mod error;
pub mod math;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::StatisticsEngine;
pub use error::StatisticsError;
pub use report::{DescriptiveStats, RollingStats};
