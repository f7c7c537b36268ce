//! pvm - reports PulseAudio volume changes on stdout or the session bus.
//!
//! Usage: `pvm dbus` or `pvm stdout`.

use std::{env, process};

use pvm::{
    cli::{self, Cli, formatting::format_error},
    config::Config,
    monitor, tracing_config,
};
use tracing::{Instrument, error, info_span};
use tracing_appender::non_blocking::WorkerGuard;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = cli::parse_args(env::args_os()).unwrap_or_else(|exit| exit.exit());

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    let log_guard = match tracing_config::init(&config.general) {
        Ok(guard) => guard,
        Err(e) => fail(&e),
    };

    let status = match monitor::run(cli.mode, &config)
        .instrument(info_span!("pvm"))
        .await
    {
        Ok(status) => status,
        Err(e) => fail_with_guard(&e, log_guard),
    };

    drop(log_guard);
    process::exit(status);
}

fn load_config(cli: &Cli) -> pvm::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn fail_with_guard(error: &pvm::PvmError, log_guard: Option<WorkerGuard>) -> ! {
    error!(error = %error, "Monitor stopped");
    drop(log_guard);
    fail(error)
}

fn fail(error: &pvm::PvmError) -> ! {
    eprintln!("{}", format_error(&error.to_string()));
    process::exit(error.exit_code())
}
