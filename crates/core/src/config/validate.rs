use super::{types::Config, ConfigError};

/// Validate a loaded configuration.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let decision = &config.decision;

    if decision.hour_long_runtime_min > decision.hour_long_runtime_max {
        return Err(ConfigError::ValidationError(format!(
            "hour_long_runtime_min ({}) must not exceed hour_long_runtime_max ({})",
            decision.hour_long_runtime_min, decision.hour_long_runtime_max
        )));
    }

    Ok(())
}
