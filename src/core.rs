use thiserror::Error;

use crate::{
    config::ConfigError,
    services::{dbus::DbusError, pulse::PulseError},
};

/// Top-level error for the monitor.
///
/// Every variant terminates the process; [`PvmError::exit_code`] gives the
/// status the binary reports.
#[derive(Error, Debug)]
pub enum PvmError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// PulseAudio connection or operation failed
    #[error(transparent)]
    Pulse(#[from] PulseError),

    /// D-Bus setup or signal emission failed
    #[error(transparent)]
    Dbus(#[from] DbusError),

    /// Writing a report to standard output failed
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),

    /// Installing the interrupt handler failed
    #[error("failed to install signal handler: {0}")]
    Signal(#[source] std::io::Error),

    /// Logging could not be initialized
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl PvmError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// A specialized `Result` type for monitor operations.
pub type Result<T> = std::result::Result<T, PvmError>;
