//! Config validation.

use plume_common::ConfigError;

use crate::schema::PlumeConfig;

/// Reject configs that would misbehave at runtime in confusing ways.
pub fn validate(config: &PlumeConfig) -> Result<(), ConfigError> {
    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.level must not be empty".into(),
        ));
    }
    if let Some(path) = &config.core.path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "core.path must not be empty".into(),
            ));
        }
    }
    if config.core.args.iter().any(|arg| arg.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "core.args must not contain empty strings".into(),
        ));
    }
    Ok(())
}
