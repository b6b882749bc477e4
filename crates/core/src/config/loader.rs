use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment overrides, e.g. `AVIF2JPG_CONVERTER__QUALITY=85`
const ENV_PREFIX: &str = "AVIF2JPG_";

fn defaults() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

fn env() -> Env {
    Env::prefixed(ENV_PREFIX).split("__")
}

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = defaults()
        .merge(Toml::file(path))
        .merge(env())
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load built-in defaults with environment variable overrides (no file)
pub fn load_default_config() -> Result<Config, ConfigError> {
    defaults()
        .merge(env())
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
