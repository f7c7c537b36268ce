use std::borrow::Cow;

use libpulse_binding::{
    context::introspect::{ServerInfo, SinkInfo, SourceInfo},
    volume::Volume,
};

use super::events::{DeviceKind, DeviceReport, ServerReport};

/// Converts a raw volume to a percentage of the normal level.
///
/// - `Volume::MUTED` (0) → 0.0
/// - `Volume::NORMAL` (65536) → 100.0
///
/// Values above normal (software amplification) exceed 100.
pub fn volume_percent(volume: Volume) -> f32 {
    volume.0 as f32 / Volume::NORMAL.0 as f32 * 100.0
}

fn cow_str_to_string(cow_str: Option<&Cow<str>>) -> String {
    cow_str.map(|s| s.to_string()).unwrap_or_default()
}

fn cow_str_to_option(cow_str: Option<&Cow<str>>) -> Option<String> {
    cow_str.map(|s| s.to_string())
}

/// Create a device report from PulseAudio sink information
pub fn device_report_from_sink(sink_info: &SinkInfo) -> DeviceReport {
    DeviceReport {
        kind: DeviceKind::Sink,
        index: sink_info.index,
        name: cow_str_to_string(sink_info.name.as_ref()),
        volume: sink_info.volume.avg(),
        muted: sink_info.mute,
    }
}

/// Create a device report from PulseAudio source information
pub fn device_report_from_source(source_info: &SourceInfo) -> DeviceReport {
    DeviceReport {
        kind: DeviceKind::Source,
        index: source_info.index,
        name: cow_str_to_string(source_info.name.as_ref()),
        volume: source_info.volume.avg(),
        muted: source_info.mute,
    }
}

/// Create a server report from PulseAudio server information
pub fn server_report(server_info: &ServerInfo) -> ServerReport {
    ServerReport {
        server_name: cow_str_to_option(server_info.server_name.as_ref()),
        server_version: cow_str_to_option(server_info.server_version.as_ref()),
        default_sink_name: cow_str_to_option(server_info.default_sink_name.as_ref()),
        default_source_name: cow_str_to_option(server_info.default_source_name.as_ref()),
    }
}
