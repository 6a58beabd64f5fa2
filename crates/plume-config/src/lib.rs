//! Plume configuration system.
//!
//! TOML-based configuration with full serde defaults, so a partial config
//! (or none at all) works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = plume_config::load_config().expect("failed to load config");
//! assert!(!config.logging.level.is_empty());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::PlumeConfig;
pub use toml_loader::{default_config_path, load_from_path};

use plume_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// A missing file yields the defaults; a present-but-broken file is an
/// error so that a typo never silently reverts the user to defaults.
pub fn load_config() -> Result<PlumeConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
