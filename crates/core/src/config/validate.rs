use super::{types::Config, ConfigError};
use crate::naming::sanitize;

fn validate_extension(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{} cannot be empty",
            field
        )));
    }
    if value.starts_with('.') || value.contains(['/', '\\']) {
        return Err(ConfigError::ValidationError(format!(
            "{} must be a bare extension like \"jpg\", got {:?}",
            field, value
        )));
    }
    Ok(())
}

/// Validate configuration
/// Currently validates:
/// - JPEG quality is within 1..=100
/// - Source and output extensions are bare, non-empty extensions
/// - Fallback name is non-empty and already web-safe
/// - Source and output directories differ
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let quality = config.converter.quality;
    if !(1..=100).contains(&quality) {
        return Err(ConfigError::ValidationError(format!(
            "converter.quality must be between 1 and 100, got {}",
            quality
        )));
    }

    validate_extension("source.extension", &config.source.extension)?;
    validate_extension("output.extension", &config.output.extension)?;

    let fallback = &config.output.fallback_name;
    if fallback.is_empty() || sanitize(&format!("{}.jpg", fallback)) != *fallback {
        return Err(ConfigError::ValidationError(format!(
            "output.fallback_name must be lowercase letters, digits and single hyphens, got {:?}",
            fallback
        )));
    }

    if config.source.dir == config.output.dir {
        return Err(ConfigError::ValidationError(
            "source.dir and output.dir must be different directories".to_string(),
        ));
    }

    Ok(())
}
