//! Configuration schema definitions and loading.
//!
//! Every field has a default, so a missing config file or a partial one
//! is always usable. The file lives at `$XDG_CONFIG_HOME/pvm/config.toml`.

mod dbus;
mod error;
mod general;
mod loading;
mod paths;
mod pulse;

#[cfg(test)]
mod tests;

pub use dbus::DbusConfig;
pub use error::{ConfigError, Result};
pub use general::{GeneralConfig, LogFormat, LogLevel};
pub use paths::ConfigPaths;
pub use pulse::PulseConfig;

use serde::{Deserialize, Serialize};

/// Main configuration structure for pvm.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Audio server connection settings.
    #[serde(default)]
    pub pulse: PulseConfig,

    /// Session bus signal settings.
    #[serde(default)]
    pub dbus: DbusConfig,
}
