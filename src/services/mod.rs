/// Session bus signal emitter
pub mod dbus;
/// PulseAudio mixer monitor
pub mod pulse;
