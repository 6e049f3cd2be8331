use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Configuration value out of range: {0}")]
    OutOfRange(String),
}
