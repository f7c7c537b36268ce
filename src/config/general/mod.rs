mod log_format;
mod log_level;

pub use log_format::LogFormat;
pub use log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// General configuration settings.
///
/// Contains settings that affect the process as a whole, such as logging.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GeneralConfig {
    /// Logging level, used when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log line format, used when `PVM_LOG_FORMAT` is not set.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Also write logs to a daily rotated file under `$HOME/.pvm/logs`.
    #[serde(default)]
    pub log_to_file: bool,
}
