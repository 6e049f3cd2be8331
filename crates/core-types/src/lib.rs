//! # Pairscope Core Types
//!
//! The foundational data model shared by every other crate in the workspace.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate knows nothing about spreads, statistics, or risk.
//!   It only defines what a date-indexed series *is* and what makes one valid.
//! - **Validated Construction:** A `TimeSeries` can only be built through
//!   constructors that enforce its index invariants, so downstream crates
//!   never have to re-check ordering.
//!
//! ## Public API
//!
//! - `TimeSeries`: an ordered, date-indexed sequence of `f64` observations.
//! - `CoreError`: the specific error types that can be returned from this crate.

pub mod error;
pub mod series;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use series::TimeSeries;
