//! Command-line interface.
//!
//! `pvm <dbus|stdout> [--config PATH]`. Anything that does not parse prints
//! usage and exits with status 1.

mod args;
pub mod formatting;

#[cfg(test)]
mod tests;

pub use args::{Cli, CliExit, OutputMode, USAGE_EXIT_CODE, parse_args, usage};
