use std::{fs, io::ErrorKind, path::Path};

use tracing::debug;

use super::{Config, ConfigError, ConfigPaths, Result};

impl Config {
    /// Loads the config from its default location.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be located, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_or_default(&path)
    }

    /// Loads the config from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Config> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content, Some(path)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(ConfigError::io(&e, path)),
        }
    }

    /// Loads the config from `path`; the file must exist.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(&e, path))?;
        Self::from_toml(&content, Some(path))
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML for this schema.
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<Config> {
        toml::from_str(content).map_err(|e| ConfigError::toml_parse(e, path))
    }
}
