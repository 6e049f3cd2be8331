use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AnalysisSettings, Config, ProviderSettings};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file (when present), deserializes it into our strongly-typed
/// `Config` struct, and validates the ranges that have to hold before any
/// analysis can run. A missing file is not an error: every field has a
/// default, and the file only exists to override them.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml").required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    validate(&config)?;

    Ok(config)
}

/// Rejects configurations that the engines would refuse anyway, so the
/// failure happens at startup instead of mid-analysis.
fn validate(config: &Config) -> Result<(), ConfigError> {
    let analysis = &config.analysis;
    if analysis.min_spread <= 0.0 {
        return Err(ConfigError::OutOfRange(
            "analysis.min_spread must be greater than 0".to_string(),
        ));
    }
    if analysis.cost_per_leg < 0.0 {
        return Err(ConfigError::OutOfRange(
            "analysis.cost_per_leg must not be negative".to_string(),
        ));
    }
    if analysis.confidence_level <= 0.0 || analysis.confidence_level >= 1.0 {
        return Err(ConfigError::OutOfRange(
            "analysis.confidence_level must be strictly between 0 and 1".to_string(),
        ));
    }
    if analysis.rolling_window == 0 {
        return Err(ConfigError::OutOfRange(
            "analysis.rolling_window must be at least 1".to_string(),
        ));
    }
    if config.provider.volatility < 0.0 {
        return Err(ConfigError::OutOfRange(
            "provider.volatility must not be negative".to_string(),
        ));
    }
    Ok(())
}
