use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    Result,
    config::DbusConfig,
    services::{
        dbus::SignalEmitter,
        pulse::{DeviceReport, ServerReport},
    },
};

use super::{Reporter, StdoutReporter};

/// Emits `sinkChanged` / `sourceChanged` on the session bus.
///
/// Server details are still printed to standard output.
pub struct DbusReporter {
    emitter: SignalEmitter,
    console: StdoutReporter,
}

impl DbusReporter {
    /// Connects to the session bus and claims the configured name.
    ///
    /// # Errors
    /// Returns error if the bus connection or name request fails.
    pub async fn connect(config: &DbusConfig) -> Result<Self> {
        let emitter = SignalEmitter::connect(config).await?;
        Ok(Self {
            emitter,
            console: StdoutReporter::stdout(),
        })
    }
}

#[async_trait]
impl Reporter for DbusReporter {
    async fn server_info(&mut self, report: &ServerReport) -> Result<()> {
        self.console.write_server_info(report)
    }

    async fn device_changed(&mut self, report: &DeviceReport) -> Result<()> {
        let signal = report.kind.signal_name();

        match self.emitter.emit(signal).await {
            Ok(()) => debug!(
                signal,
                index = report.index,
                path = self.emitter.target().path(),
                "Signal emitted"
            ),
            Err(e) => warn!(error = %e, "Dropping change notification"),
        }

        Ok(())
    }
}
