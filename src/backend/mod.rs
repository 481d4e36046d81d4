//! Network boundary
//!
//! A [`Backend`] opens a session to the external system using the caller's
//! credentials as the session's own login, and a [`Session`] answers the
//! probe query that confirms the login is usable.

pub mod mysql;

use async_trait::async_trait;
use std::fmt;

use crate::auth::Credential;
use crate::error::BackendError;

pub use mysql::MySqlBackend;

/// Address of the server credentials are checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
}

impl ConnectionTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Opens authenticated sessions.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Connect to `target`, authenticating with `credential`.
    ///
    /// Implementations must not classify failures: a refused login and an
    /// unreachable host are both plain errors.
    async fn connect(
        &self,
        target: &ConnectionTarget,
        credential: &Credential,
    ) -> Result<Box<dyn Session>, BackendError>;
}

/// A live, authenticated session.
#[async_trait]
pub trait Session: Send {
    /// Run the read-only probe query and return its single integer value.
    async fn probe(&mut self) -> Result<i64, BackendError>;

    /// Release the session's resources.
    async fn close(self: Box<Self>);
}
