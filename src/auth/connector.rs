//! Host capability traits
//!
//! The identity provider hosting this connector only sees these two traits:
//! one to construct a connector from its configuration, one to log users in.

use async_trait::async_trait;

use super::context::LoginContext;
use super::identity::Scopes;
use super::results::LoginResult;
use crate::error::{ConfigError, ConnectorError};

/// Builds a connector from configuration.
pub trait OpenConnector {
    type Connector: PasswordConnector;

    /// Validates the configuration and returns a ready connector. `id` is the
    /// host's name for this connector instance.
    fn open(&self, id: &str) -> Result<Self::Connector, ConfigError>;
}

/// A connector that checks a username and password.
#[async_trait]
pub trait PasswordConnector: Send + Sync {
    /// Label the host shows next to the username field. Empty means the host
    /// picks its own.
    fn prompt(&self) -> &str;

    /// Checks `username` / `password`.
    ///
    /// Returns `Ok` with `valid_password == false` when the credentials are
    /// rejected, and `Err` for failures that say nothing about the
    /// credentials.
    async fn login(
        &self,
        ctx: &LoginContext,
        scopes: &Scopes,
        username: &str,
        password: &str,
    ) -> Result<LoginResult, ConnectorError>;
}
