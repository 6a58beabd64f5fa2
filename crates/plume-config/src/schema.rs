//! Configuration schema.
//!
//! All structs use `serde(default)` so partial configs work correctly;
//! missing fields are filled with the defaults below.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the plume shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlumeConfig {
    pub core: CoreConfig,
    pub startup: StartupConfig,
    pub logging: LoggingConfig,
}

/// How to find and launch the core process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Explicit path to the core binary. When unset the shell resolves it
    /// from `PLUME_CORE`, the shell executable's directory, and `$PATH`.
    pub path: Option<PathBuf>,
    /// Extra arguments passed to the core at spawn.
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Open one empty document window at launch.
    pub initial_window: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            initial_window: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter directive; the `--log-level` flag overrides this.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "plume=info".into(),
        }
    }
}
