//! Output adapters.
//!
//! A [`Reporter`] receives every server and device report from the monitor
//! loop. The console reporter prints them; the bus reporter turns device
//! reports into change signals.

mod dbus;
/// Line formatting for console output
pub mod format;
mod stdout;

pub use dbus::DbusReporter;
pub use stdout::StdoutReporter;

use async_trait::async_trait;

use crate::{
    Result,
    cli::OutputMode,
    config::Config,
    services::pulse::{DeviceReport, ServerReport},
};

/// Destination for mixer reports.
#[async_trait]
pub trait Reporter: Send {
    /// Called once with the server's details after connecting.
    ///
    /// # Errors
    /// Returns error if the report cannot be written.
    async fn server_info(&mut self, report: &ServerReport) -> Result<()>;

    /// Called for every sink or source volume/mute change.
    ///
    /// # Errors
    /// Returns error if the report cannot be written.
    async fn device_changed(&mut self, report: &DeviceReport) -> Result<()>;
}

/// Builds the reporter for the selected output mode.
///
/// # Errors
/// Returns error if the session bus cannot be set up in `dbus` mode.
pub async fn build(mode: OutputMode, config: &Config) -> Result<Box<dyn Reporter>> {
    match mode {
        OutputMode::Stdout => Ok(Box::new(StdoutReporter::stdout())),
        OutputMode::Dbus => Ok(Box::new(DbusReporter::connect(&config.dbus).await?)),
    }
}
