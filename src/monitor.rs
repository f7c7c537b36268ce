//! Runtime loop: forwards audio server reports to the selected output.

use tokio::signal::unix::{SignalKind, signal};
use tracing::{info, instrument};

use crate::{
    PvmError, Result,
    cli::OutputMode,
    config::Config,
    output::{self, Reporter},
    services::pulse::{MonitorEvent, PulseMonitor},
};

/// Exit status for a clean shutdown.
pub const EXIT_SUCCESS: i32 = 0;

/// Runs the monitor until the connection ends or SIGINT arrives.
///
/// Returns the process exit status: 0 when the server terminates the
/// connection or on interrupt, otherwise the mainloop's quit status.
///
/// # Errors
/// Returns error if the output channel cannot be set up, the audio server
/// cannot be reached, the connection fails, or a report cannot be written.
#[instrument(skip(config))]
pub async fn run(mode: OutputMode, config: &Config) -> Result<i32> {
    let mut interrupt = signal(SignalKind::interrupt()).map_err(PvmError::Signal)?;
    let mut reporter = output::build(mode, config).await?;

    let mut pulse = tokio::select! {
        pulse = PulseMonitor::connect(&config.pulse) => pulse?,
        _ = interrupt.recv() => {
            info!("Interrupted before the connection was ready");
            return Ok(EXIT_SUCCESS);
        }
    };

    loop {
        tokio::select! {
            event = pulse.next_event() => {
                if let Some(status) = dispatch(event?, reporter.as_mut()).await? {
                    return Ok(status);
                }
            }
            _ = interrupt.recv() => {
                info!("Interrupted, closing PulseAudio connection");
                pulse.disconnect();
                return Ok(EXIT_SUCCESS);
            }
        }
    }
}

/// Hands one event to the reporter; returns an exit status when the loop
/// should stop.
async fn dispatch(event: MonitorEvent, reporter: &mut dyn Reporter) -> Result<Option<i32>> {
    match event {
        MonitorEvent::Server(report) => {
            info!(
                server = report.server_name.as_deref().unwrap_or("unknown"),
                version = report.server_version.as_deref().unwrap_or("unknown"),
                "Server info received"
            );
            reporter.server_info(&report).await?;
            Ok(None)
        }
        MonitorEvent::Device(report) => {
            reporter.device_changed(&report).await?;
            Ok(None)
        }
        MonitorEvent::Terminated => {
            info!("PulseAudio connection terminated");
            Ok(Some(EXIT_SUCCESS))
        }
        MonitorEvent::Quit(status) => {
            info!(status, "PulseAudio mainloop quit");
            Ok(Some(status))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use libpulse_binding::volume::Volume;

    use super::*;
    use crate::{
        output::StdoutReporter,
        services::pulse::{DeviceKind, DeviceReport, ServerReport},
    };

    fn sink_report(muted: bool) -> DeviceReport {
        DeviceReport {
            kind: DeviceKind::Sink,
            index: 0,
            name: "alsa_output.pci-0000_00_1f.3.analog-stereo".to_string(),
            volume: Volume(Volume::NORMAL.0 / 2),
            muted,
        }
    }

    #[tokio::test]
    async fn device_events_are_reported_and_keep_running() {
        let mut reporter = StdoutReporter::new(Vec::new());

        let status = dispatch(MonitorEvent::Device(sink_report(true)), &mut reporter)
            .await
            .unwrap();

        assert_eq!(status, None);
        assert_eq!(
            String::from_utf8(reporter.into_inner()).unwrap(),
            "[sink  ] percent volume = 50% (muted)\n"
        );
    }

    #[tokio::test]
    async fn server_event_prints_defaults() {
        let mut reporter = StdoutReporter::new(Vec::new());
        let report = ServerReport {
            server_name: Some("pulseaudio".to_string()),
            server_version: Some("17.0".to_string()),
            default_sink_name: Some("speakers".to_string()),
            default_source_name: None,
        };

        let status = dispatch(MonitorEvent::Server(report), &mut reporter)
            .await
            .unwrap();

        assert_eq!(status, None);
        assert_eq!(
            String::from_utf8(reporter.into_inner()).unwrap(),
            "[info  ] default sink name = speakers\n"
        );
    }

    #[tokio::test]
    async fn termination_stops_with_success() {
        let mut reporter = StdoutReporter::new(Vec::new());

        let status = dispatch(MonitorEvent::Terminated, &mut reporter)
            .await
            .unwrap();

        assert_eq!(status, Some(EXIT_SUCCESS));
        assert!(reporter.into_inner().is_empty());
    }

    #[tokio::test]
    async fn mainloop_quit_status_is_forwarded() {
        let mut reporter = StdoutReporter::new(Vec::new());

        let status = dispatch(MonitorEvent::Quit(3), &mut reporter)
            .await
            .unwrap();

        assert_eq!(status, Some(3));
    }
}
