use serde::{Deserialize, Serialize};

/// PulseAudio connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PulseConfig {
    /// Application name announced to the audio server.
    #[serde(default = "default_client_name")]
    pub client_name: String,

    /// Server address (e.g. `unix:/run/user/1000/pulse/native`).
    /// The library's default server is used when unset.
    #[serde(default)]
    pub server: Option<String>,

    /// Let the library spawn a server if none is running.
    #[serde(default)]
    pub autospawn: bool,
}

fn default_client_name() -> String {
    "pvm".to_string()
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            client_name: default_client_name(),
            server: None,
            autospawn: false,
        }
    }
}
