//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use crate::config::{Config, ConfigError, DbusConfig, GeneralConfig, LogFormat, LogLevel};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.general.log_format, LogFormat::Compact);
    assert!(!config.general.log_to_file);
    assert_eq!(config.pulse.client_name, "pvm");
    assert_eq!(config.pulse.server, None);
    assert!(!config.pulse.autospawn);
    assert_eq!(config.dbus.bus_name, "com.ch1p.pvm");
    assert_eq!(config.dbus.object_path, "/com/ch1p/Object");
}

#[test]
fn interface_falls_back_to_bus_name() {
    let config = Config::default();
    assert_eq!(config.dbus.interface(), "com.ch1p.pvm");

    let config = Config::from_toml(
        r#"
        [dbus]
        bus_name = "org.example.Mixer"
        "#,
        None,
    )
    .unwrap();
    assert_eq!(config.dbus.interface(), "org.example.Mixer");
}

#[test]
fn explicit_interface_wins() {
    let config = Config::from_toml(
        r#"
        [dbus]
        interface = "org.example.Volume"
        "#,
        None,
    )
    .unwrap();

    assert_eq!(config.dbus.bus_name, "com.ch1p.pvm");
    assert_eq!(config.dbus.interface(), "org.example.Volume");
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"
        log_format = "json"
        log_to_file = true

        [pulse]
        client_name = "volume-watch"
        server = "unix:/tmp/pulse.sock"
        autospawn = true

        [dbus]
        bus_name = "org.example.Mixer"
        object_path = "/org/example/Mixer"
    "#;

    let config = Config::from_toml(toml_str, None).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.general.log_format, LogFormat::Json);
    assert!(config.general.log_to_file);
    assert_eq!(config.pulse.client_name, "volume-watch");
    assert_eq!(config.pulse.server.as_deref(), Some("unix:/tmp/pulse.sock"));
    assert!(config.pulse.autospawn);
    assert_eq!(config.dbus.bus_name, "org.example.Mixer");
    assert_eq!(config.dbus.object_path, "/org/example/Mixer");
}

#[test]
fn config_partial_sections_keep_defaults() {
    let config = Config::from_toml(
        r#"
        [pulse]
        autospawn = true
        "#,
        None,
    )
    .unwrap();

    assert!(config.pulse.autospawn);
    assert_eq!(config.pulse.client_name, "pvm");
    assert_eq!(config.general, GeneralConfig::default());
    assert_eq!(config.dbus, DbusConfig::default());
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml("", None).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_serialize_toml() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[pulse]"));
    assert!(toml_str.contains("[dbus]"));
    assert!(toml_str.contains("log_level = \"info\""));
}

#[test]
fn unknown_log_level_is_rejected() {
    let result = Config::from_toml(
        r#"
        [general]
        log_level = "loud"
        "#,
        None,
    );

    match result {
        Err(ConfigError::TomlParse { location, .. }) => assert_eq!(location, "string"),
        other => panic!("expected TOML parse error, got {other:?}"),
    }
}

#[test]
fn log_format_from_str() {
    assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
    assert_eq!("compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
    assert!("xml".parse::<LogFormat>().is_err());
}

#[test]
fn log_level_display_matches_filter_syntax() {
    assert_eq!(LogLevel::Error.to_string(), "error");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}
