use serde::{Deserialize, Serialize};

/// Well-known name requested on the session bus.
pub const DEFAULT_BUS_NAME: &str = "com.ch1p.pvm";

/// Object path the change signals are emitted from.
pub const DEFAULT_OBJECT_PATH: &str = "/com/ch1p/Object";

/// Session bus signal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbusConfig {
    /// Well-known bus name, requested with replace-existing semantics.
    #[serde(default = "default_bus_name")]
    pub bus_name: String,

    /// Object path of the emitted signals.
    #[serde(default = "default_object_path")]
    pub object_path: String,

    /// Interface of the emitted signals. Falls back to `bus_name`.
    #[serde(default)]
    pub interface: Option<String>,
}

impl DbusConfig {
    /// Interface the signals are emitted on.
    pub fn interface(&self) -> &str {
        self.interface.as_deref().unwrap_or(&self.bus_name)
    }
}

fn default_bus_name() -> String {
    DEFAULT_BUS_NAME.to_string()
}

fn default_object_path() -> String {
    DEFAULT_OBJECT_PATH.to_string()
}

impl Default for DbusConfig {
    fn default() -> Self {
        Self {
            bus_name: default_bus_name(),
            object_path: default_object_path(),
            interface: None,
        }
    }
}
