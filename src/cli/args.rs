use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, ValueEnum, error::ErrorKind};

/// Exit status for malformed command lines.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Where mixer changes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Emit `sinkChanged` / `sourceChanged` on the session bus
    Dbus,
    /// Print volume and mute state to standard output
    Stdout,
}

/// Parsed command line.
#[derive(Debug, Parser)]
#[command(name = "pvm", version)]
#[command(about = "Report PulseAudio sink/source volume changes")]
pub struct Cli {
    /// Output channel for change reports
    #[arg(value_enum)]
    pub mode: OutputMode,

    /// Config file to use instead of $XDG_CONFIG_HOME/pvm/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Request to end the process before the monitor starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliExit {
    /// Process exit status
    pub code: i32,
    /// Text to print
    pub message: String,
    /// Print to standard error instead of standard output
    pub to_stderr: bool,
}

impl CliExit {
    /// Prints the message and terminates the process.
    pub fn exit(&self) -> ! {
        if self.to_stderr {
            eprintln!("{}", self.message);
        } else {
            println!("{}", self.message);
        }
        std::process::exit(self.code)
    }
}

/// Usage text listing both output modes.
pub fn usage(program: &str) -> String {
    format!("Usage:\n{program} dbus\n{program} stdout")
}

/// Parses `args` (program name first).
///
/// `--help` and `--version` yield a [`CliExit`] with status 0; every other
/// parse failure yields the usage text with [`USAGE_EXIT_CODE`].
///
/// # Errors
/// Returns [`CliExit`] when the process should stop instead of monitoring.
pub fn parse_args<I, T>(args: I) -> Result<Cli, CliExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pvm".to_string());

    Cli::try_parse_from(&args).map_err(|error| match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliExit {
            code: 0,
            message: error.to_string().trim_end().to_string(),
            to_stderr: false,
        },
        _ => CliExit {
            code: USAGE_EXIT_CODE,
            message: usage(&program),
            to_stderr: true,
        },
    })
}
