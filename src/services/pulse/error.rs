/// PulseAudio service errors
#[derive(thiserror::Error, Debug)]
pub enum PulseError {
    /// PulseAudio connection failed
    #[error("Connection failure: {0}")]
    ConnectionFailed(String),
}
