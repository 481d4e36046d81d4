//! Error types
//!
//! Defines the error taxonomy of the connector: configuration problems found
//! at construction time, and hard failures of a login attempt.

use std::error::Error;
use std::fmt;

/// Opaque error raised by a backend while connecting or probing.
pub type BackendError = Box<dyn Error + Send + Sync + 'static>;

/// Configuration errors, detected once when the connector is constructed
#[derive(Debug)]
pub enum ConfigError {
    /// A required field is empty or zero. Holds the field name.
    MissingField(&'static str),
    /// The configuration source could not be read or deserialised.
    Load(config::ConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(name) => {
                write!(f, "mysql: missing required field {:?}", name)
            }
            ConfigError::Load(e) => write!(f, "mysql: failed to load configuration: {}", e),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::MissingField(_) => None,
            ConfigError::Load(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(error: config::ConfigError) -> Self {
        ConfigError::Load(error)
    }
}

/// Hard failures of a login attempt.
///
/// A rejected password is not an error; see [`crate::auth::LoginResult`].
#[derive(Debug)]
pub enum ConnectorError {
    /// Opening the authenticated connection failed. Bad credentials and an
    /// unreachable server both land here.
    Connection(BackendError),
    /// The session opened but the probe query failed or was unreadable.
    Probe(BackendError),
    /// The caller cancelled the login.
    Cancelled,
    /// The caller's deadline passed before the login finished.
    DeadlineExceeded,
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorError::Connection(e) => write!(f, "mysql: connection failed: {}", e),
            ConnectorError::Probe(e) => write!(f, "mysql: probe query failed: {}", e),
            ConnectorError::Cancelled => write!(f, "mysql: login cancelled"),
            ConnectorError::DeadlineExceeded => write!(f, "mysql: login deadline exceeded"),
        }
    }
}

impl Error for ConnectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConnectorError::Connection(e) | ConnectorError::Probe(e) => Some(e.as_ref()),
            ConnectorError::Cancelled | ConnectorError::DeadlineExceeded => None,
        }
    }
}

impl ConnectorError {
    /// True when the attempt ended because of the caller's context rather
    /// than the backend.
    pub fn is_context_error(&self) -> bool {
        matches!(
            self,
            ConnectorError::Cancelled | ConnectorError::DeadlineExceeded
        )
    }
}
