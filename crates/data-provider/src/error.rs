use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid provider parameter: {0}")]
    InvalidParameter(String),

    #[error("Core data model error: {0}")]
    Core(#[from] core_types::CoreError),
}
