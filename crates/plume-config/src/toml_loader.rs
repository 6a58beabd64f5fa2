//! TOML config file loading.

use std::path::{Path, PathBuf};

use plume_common::ConfigError;

use crate::schema::PlumeConfig;

/// Platform config path: `<config dir>/plume/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("plume").join("config.toml"))
}

/// Load from the default location. A missing file yields the defaults.
pub fn load_default() -> Result<PlumeConfig, ConfigError> {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(PlumeConfig::default()),
    }
}

/// Load and parse a specific config file.
pub fn load_from_path(path: &Path) -> Result<PlumeConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::FileNotFound(path.to_path_buf()))?;
    toml::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))
}
