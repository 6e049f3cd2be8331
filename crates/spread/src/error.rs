use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpreadError {
    #[error("Input series are not index-aligned: {0}")]
    Misaligned(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Core data model error: {0}")]
    Core(#[from] core_types::CoreError),
}
