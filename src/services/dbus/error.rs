/// D-Bus service errors
#[derive(thiserror::Error, Debug)]
pub enum DbusError {
    /// Session bus connection failed
    #[error("DBus connection error: {0}")]
    Connection(#[source] zbus::Error),

    /// Requesting the well-known name failed
    #[error("DBus name error for '{name}': {source}")]
    NameRequest {
        /// Requested bus name
        name: String,
        /// Underlying bus error
        #[source]
        source: zbus::Error,
    },

    /// A configured bus name or interface is not valid D-Bus syntax
    #[error("invalid DBus name '{name}': {details}")]
    InvalidName {
        /// Offending name
        name: String,
        /// Validation error details
        details: String,
    },

    /// The configured object path is not valid D-Bus syntax
    #[error("invalid DBus object path '{path}': {details}")]
    InvalidPath {
        /// Offending path
        path: String,
        /// Validation error details
        details: String,
    },

    /// Emitting a signal failed
    #[error("DBus send of '{signal}' failed: {source}")]
    Emit {
        /// Signal name
        signal: String,
        /// Underlying bus error
        #[source]
        source: zbus::Error,
    },
}
