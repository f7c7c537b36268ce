use libpulse_binding::{
    context::subscribe::{Facility, Operation},
    volume::Volume,
};

use super::conversion::volume_percent;

/// Kind of device a mixer change refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Output device (speakers, headphones)
    Sink,
    /// Input device (microphone)
    Source,
}

impl DeviceKind {
    /// Maps a subscription facility onto a device kind.
    ///
    /// Returns `None` for facilities that are not sinks or sources.
    pub fn from_facility(facility: Facility) -> Option<Self> {
        match facility {
            Facility::Sink => Some(DeviceKind::Sink),
            Facility::Source => Some(DeviceKind::Source),
            _ => None,
        }
    }

    /// Fixed-width label used in console output.
    pub fn label(self) -> &'static str {
        match self {
            DeviceKind::Sink => "sink  ",
            DeviceKind::Source => "source",
        }
    }

    /// Name of the bus signal announcing a change of this kind.
    pub fn signal_name(self) -> &'static str {
        match self {
            DeviceKind::Sink => "sinkChanged",
            DeviceKind::Source => "sourceChanged",
        }
    }
}

/// Volume and mute state of one sink or source
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceReport {
    /// Sink or source
    pub kind: DeviceKind,
    /// Server-side device index
    pub index: u32,
    /// Device name, empty when the server reports none
    pub name: String,
    /// Average volume across all channels
    pub volume: Volume,
    /// Whether the device is muted
    pub muted: bool,
}

impl DeviceReport {
    /// Average volume relative to the normal (100%) level, in percent.
    pub fn volume_percent(&self) -> f32 {
        volume_percent(self.volume)
    }
}

/// Server details relevant to the monitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerReport {
    /// Server package name, usually "pulseaudio"
    pub server_name: Option<String>,
    /// Server version string
    pub server_version: Option<String>,
    /// Name of the default sink
    pub default_sink_name: Option<String>,
    /// Name of the default source
    pub default_source_name: Option<String>,
}

/// Events surfaced by [`PulseMonitor::next_event`](super::PulseMonitor::next_event)
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    /// Server information, delivered once after connecting
    Server(ServerReport),
    /// A sink or source changed volume or mute state
    Device(DeviceReport),
    /// The server closed the connection cleanly
    Terminated,
    /// The mainloop was asked to quit with the given status
    Quit(i32),
}

/// Device whose info should be fetched for a subscription event.
///
/// Only sink and source events qualify; `Removed` carries no record to fetch.
pub(super) fn device_to_query(
    facility: Option<Facility>,
    operation: Option<Operation>,
) -> Option<DeviceKind> {
    let kind = facility.and_then(DeviceKind::from_facility)?;

    match operation {
        Some(Operation::Removed) => None,
        _ => Some(kind),
    }
}

/// Raw notifications forwarded from library callbacks to the monitor task
#[derive(Debug)]
pub(super) enum Notification {
    StateChanged,
    Subscription {
        facility: Option<Facility>,
        operation: Option<Operation>,
        index: u32,
    },
    Server(ServerReport),
    Device(DeviceReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_maps_to_kind() {
        assert_eq!(DeviceKind::from_facility(Facility::Sink), Some(DeviceKind::Sink));
        assert_eq!(
            DeviceKind::from_facility(Facility::Source),
            Some(DeviceKind::Source)
        );
        assert_eq!(DeviceKind::from_facility(Facility::SinkInput), None);
        assert_eq!(DeviceKind::from_facility(Facility::Server), None);
    }

    #[test]
    fn sink_and_source_changes_query_their_device() {
        assert_eq!(
            device_to_query(Some(Facility::Sink), Some(Operation::Changed)),
            Some(DeviceKind::Sink)
        );
        assert_eq!(
            device_to_query(Some(Facility::Source), Some(Operation::New)),
            Some(DeviceKind::Source)
        );
    }

    #[test]
    fn removed_device_is_not_queried() {
        assert_eq!(
            device_to_query(Some(Facility::Sink), Some(Operation::Removed)),
            None
        );
        assert_eq!(
            device_to_query(Some(Facility::Source), Some(Operation::Removed)),
            None
        );
    }

    #[test]
    fn other_facilities_are_not_queried() {
        assert_eq!(
            device_to_query(Some(Facility::SinkInput), Some(Operation::Changed)),
            None
        );
        assert_eq!(device_to_query(None, None), None);
    }

    #[test]
    fn labels_share_one_width() {
        assert_eq!(DeviceKind::Sink.label(), "sink  ");
        assert_eq!(DeviceKind::Source.label(), "source");
        assert_eq!(DeviceKind::Sink.label().len(), DeviceKind::Source.label().len());
    }

    #[test]
    fn signal_names() {
        assert_eq!(DeviceKind::Sink.signal_name(), "sinkChanged");
        assert_eq!(DeviceKind::Source.signal_name(), "sourceChanged");
    }

    #[test]
    fn report_percent_uses_average_volume() {
        let report = DeviceReport {
            kind: DeviceKind::Sink,
            index: 0,
            name: "alsa_output.pci-0000_00_1f.3.analog-stereo".to_string(),
            volume: Volume(Volume::NORMAL.0 / 2),
            muted: false,
        };

        assert_eq!(report.volume_percent(), 50.0);
    }
}
