//! Session bus signal emitter.
//!
//! Owns a well-known name on the session bus and broadcasts parameterless
//! signals from a fixed object path.

/// Error types
pub mod error;

pub use error::DbusError;

use tracing::{info, instrument, warn};
use zbus::{
    Connection,
    fdo::{RequestNameFlags, RequestNameReply},
    names::{BusName, InterfaceName, MemberName, WellKnownName},
    zvariant::ObjectPath,
};

use crate::config::DbusConfig;

/// Validated bus name, object path and interface for outgoing signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalTarget {
    bus_name: WellKnownName<'static>,
    path: ObjectPath<'static>,
    interface: InterfaceName<'static>,
}

impl SignalTarget {
    /// Validates the names in `config`.
    ///
    /// # Errors
    /// Returns [`DbusError::InvalidName`] or [`DbusError::InvalidPath`] when a
    /// configured value is not valid D-Bus syntax.
    pub fn from_config(config: &DbusConfig) -> Result<Self, DbusError> {
        let bus_name = WellKnownName::try_from(config.bus_name.clone()).map_err(|e| {
            DbusError::InvalidName {
                name: config.bus_name.clone(),
                details: e.to_string(),
            }
        })?;

        let path = ObjectPath::try_from(config.object_path.clone()).map_err(|e| {
            DbusError::InvalidPath {
                path: config.object_path.clone(),
                details: e.to_string(),
            }
        })?;

        let interface_name = config.interface().to_string();
        let interface = InterfaceName::try_from(interface_name.clone()).map_err(|e| {
            DbusError::InvalidName {
                name: interface_name,
                details: e.to_string(),
            }
        })?;

        Ok(Self {
            bus_name,
            path,
            interface,
        })
    }

    /// Well-known name owned by the emitter.
    pub fn bus_name(&self) -> &str {
        self.bus_name.as_str()
    }

    /// Object path of emitted signals.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Interface of emitted signals.
    pub fn interface(&self) -> &str {
        self.interface.as_str()
    }
}

/// Session bus connection that broadcasts change signals.
pub struct SignalEmitter {
    connection: Connection,
    target: SignalTarget,
}

impl SignalEmitter {
    /// Opens the session bus and requests the configured well-known name,
    /// replacing any current owner that allows it.
    ///
    /// # Errors
    /// Returns error if the names are invalid, the bus is unreachable, or the
    /// name request fails.
    #[instrument(skip(config), fields(bus_name = %config.bus_name))]
    pub async fn connect(config: &DbusConfig) -> Result<Self, DbusError> {
        let target = SignalTarget::from_config(config)?;

        let connection = Connection::session()
            .await
            .map_err(DbusError::Connection)?;

        let reply = connection
            .request_name_with_flags(
                target.bus_name.clone(),
                RequestNameFlags::ReplaceExisting.into(),
            )
            .await
            .map_err(|source| DbusError::NameRequest {
                name: target.bus_name().to_string(),
                source,
            })?;

        match reply {
            RequestNameReply::PrimaryOwner | RequestNameReply::AlreadyOwner => {
                info!(bus_name = target.bus_name(), "DBus name acquired");
            }
            RequestNameReply::InQueue | RequestNameReply::Exists => {
                warn!(
                    bus_name = target.bus_name(),
                    ?reply,
                    "DBus name is owned by another process, signals are sent from a unique name"
                );
            }
        }

        Ok(Self { connection, target })
    }

    /// Broadcasts a body-less signal named `signal_name`.
    ///
    /// # Errors
    /// Returns [`DbusError::Emit`] if the message cannot be built or sent.
    pub async fn emit(&self, signal_name: &str) -> Result<(), DbusError> {
        let emit_error = |source: zbus::Error| DbusError::Emit {
            signal: signal_name.to_string(),
            source,
        };

        let member = MemberName::try_from(signal_name).map_err(|e| emit_error(e.into()))?;

        self.connection
            .emit_signal(
                None::<BusName<'_>>,
                self.target.path.clone(),
                self.target.interface.clone(),
                member,
                &(),
            )
            .await
            .map_err(emit_error)
    }

    /// Where signals are emitted.
    pub fn target(&self) -> &SignalTarget {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let target = SignalTarget::from_config(&DbusConfig::default()).unwrap();

        assert_eq!(target.bus_name(), "com.ch1p.pvm");
        assert_eq!(target.path(), "/com/ch1p/Object");
        assert_eq!(target.interface(), "com.ch1p.pvm");
    }

    #[test]
    fn rejects_malformed_bus_name() {
        let config = DbusConfig {
            bus_name: "com/ch1p/pvm".to_string(),
            ..DbusConfig::default()
        };

        let error = SignalTarget::from_config(&config).unwrap_err();
        assert!(matches!(error, DbusError::InvalidName { ref name, .. } if name == "com/ch1p/pvm"));
    }

    #[test]
    fn rejects_relative_object_path() {
        let config = DbusConfig {
            object_path: "com/ch1p/Object".to_string(),
            ..DbusConfig::default()
        };

        let error = SignalTarget::from_config(&config).unwrap_err();
        assert!(matches!(error, DbusError::InvalidPath { .. }));
    }

    #[test]
    fn rejects_invalid_interface() {
        let config = DbusConfig {
            interface: Some("not an interface".to_string()),
            ..DbusConfig::default()
        };

        let error = SignalTarget::from_config(&config).unwrap_err();
        assert!(
            matches!(error, DbusError::InvalidName { ref name, .. } if name == "not an interface")
        );
    }

    #[test]
    fn signal_names_are_valid_members() {
        assert!(MemberName::try_from("sinkChanged").is_ok());
        assert!(MemberName::try_from("sourceChanged").is_ok());
    }
}
