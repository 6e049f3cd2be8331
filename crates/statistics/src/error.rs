use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatisticsError {
    #[error("Not enough data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Core data model error: {0}")]
    Core(#[from] core_types::CoreError),
}
