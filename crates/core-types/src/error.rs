use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Duplicate date in series index: {0}")]
    DuplicateDate(NaiveDate),

    #[error("Series index is not strictly increasing: {next} follows {prev}")]
    OutOfOrder { prev: NaiveDate, next: NaiveDate },

    #[error("Value count does not match series index: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
