//! PulseAudio mixer monitor.
//!
//! Connects to the audio server, subscribes to sink and source changes and
//! turns the library's callbacks into [`MonitorEvent`]s. Everything runs on
//! the calling task: the PulseAudio mainloop is driven as a tokio future.

/// Conversion from library records to reports
pub mod conversion;
/// Error types
pub mod error;
/// Report and event types
pub mod events;
mod monitor;

pub use error::PulseError;
pub use events::{DeviceKind, DeviceReport, MonitorEvent, ServerReport};
pub use monitor::PulseMonitor;
