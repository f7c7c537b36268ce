//! Unit tests for CLI module
//!
//! Tests argument parsing, usage handling and error formatting.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use crate::cli::{
    OutputMode, USAGE_EXIT_CODE,
    formatting::{Colors, format_error_styled},
    parse_args, usage,
};

#[test]
fn parses_dbus_mode() {
    let cli = parse_args(["pvm", "dbus"]).unwrap();

    assert_eq!(cli.mode, OutputMode::Dbus);
    assert_eq!(cli.config, None);
}

#[test]
fn parses_stdout_mode() {
    let cli = parse_args(["pvm", "stdout"]).unwrap();

    assert_eq!(cli.mode, OutputMode::Stdout);
}

#[test]
fn parses_config_override() {
    let cli = parse_args(["pvm", "stdout", "--config", "/tmp/pvm.toml"]).unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("/tmp/pvm.toml")));
}

#[test]
fn missing_mode_prints_usage() {
    let exit = parse_args(["pvm"]).unwrap_err();

    assert_eq!(exit.code, USAGE_EXIT_CODE);
    assert!(exit.to_stderr);
    assert_eq!(exit.message, usage("pvm"));
}

#[test]
fn unknown_mode_prints_usage() {
    let exit = parse_args(["/usr/bin/pvm", "syslog"]).unwrap_err();

    assert_eq!(exit.code, 1);
    assert_eq!(
        exit.message,
        "Usage:\n/usr/bin/pvm dbus\n/usr/bin/pvm stdout"
    );
}

#[test]
fn mode_is_case_sensitive() {
    let exit = parse_args(["pvm", "DBUS"]).unwrap_err();

    assert_eq!(exit.code, USAGE_EXIT_CODE);
}

#[test]
fn extra_positional_prints_usage() {
    let exit = parse_args(["pvm", "stdout", "dbus"]).unwrap_err();

    assert_eq!(exit.code, USAGE_EXIT_CODE);
}

#[test]
fn help_exits_successfully() {
    let exit = parse_args(["pvm", "--help"]).unwrap_err();

    assert_eq!(exit.code, 0);
    assert!(!exit.to_stderr);
    assert!(exit.message.contains("dbus"));
    assert!(exit.message.contains("stdout"));
}

#[test]
fn format_error_plain() {
    assert_eq!(
        format_error_styled("Connection failure: Connection refused", false),
        "error: Connection failure: Connection refused"
    );
}

#[test]
fn format_error_styled_wraps_prefix() {
    let formatted = format_error_styled("boom", true);

    assert!(formatted.starts_with(Colors::BOLD));
    assert!(formatted.contains(Colors::RED));
    assert!(formatted.ends_with("boom"));
}
