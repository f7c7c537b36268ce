//! pvm - PulseAudio volume monitor.
//!
//! Watches sink and source volume/mute changes on a running PulseAudio server
//! and reports each one either as a line on standard output or as a
//! parameterless D-Bus signal on the session bus.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pvm::{cli::OutputMode, config::Config, monitor};
//!
//! # async fn demo() -> pvm::Result<()> {
//! let config = Config::default();
//! let status = monitor::run(OutputMode::Stdout, &config).await?;
//! println!("monitor exited with {status}");
//! # Ok(())
//! # }
//! ```

/// Command-line parsing and usage handling.
pub mod cli;

/// Configuration schema and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Main monitoring loop tying the audio server to an output channel.
pub mod monitor;

/// Output adapters for reporting mixer changes.
pub mod output;

/// External service integrations (PulseAudio, D-Bus).
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{PvmError, Result};
