use crate::services::pulse::{DeviceReport, ServerReport};

/// Formats a device report as `[sink  ] percent volume = 42% (muted)`.
pub fn device_line(report: &DeviceReport) -> String {
    format!(
        "[{}] percent volume = {:.0}%{}",
        report.kind.label(),
        report.volume_percent(),
        if report.muted { " (muted)" } else { "" }
    )
}

/// Formats the default device names announced by the server.
///
/// Names the server does not report are left out.
pub fn server_lines(report: &ServerReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);

    if let Some(name) = &report.default_sink_name {
        lines.push(format!("[info  ] default sink name = {name}"));
    }
    if let Some(name) = &report.default_source_name {
        lines.push(format!("[info  ] default source name = {name}"));
    }

    lines
}
