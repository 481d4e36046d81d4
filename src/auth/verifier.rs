//! Password verifier
//!
//! Verifies credentials by logging in to the database with them and running
//! a trivial query. The database does all of the actual authentication.

use async_trait::async_trait;
use log::{debug, info};

use super::connector::PasswordConnector;
use super::context::LoginContext;
use super::credentials::Credential;
use super::identity::{Identity, Scopes};
use super::results::LoginResult;
use crate::backend::{Backend, ConnectionTarget, MySqlBackend};
use crate::config::ConnectorConfig;
use crate::error::{ConfigError, ConnectorError};

/// Password connector backed by a MySQL-compatible server.
///
/// Holds only immutable configuration once built, so one instance can serve
/// concurrent logins.
#[derive(Debug)]
pub struct MysqlConnector<B = MySqlBackend> {
    id: String,
    target: ConnectionTarget,
    username_prompt: String,
    backend: B,
}

impl<B: Backend> MysqlConnector<B> {
    /// Validates `config` and binds the connector to its target.
    pub fn new(id: &str, config: &ConnectorConfig, backend: B) -> Result<Self, ConfigError> {
        let target = config.validate()?;

        info!("Opened mysql connector {:?} for {}", id, target);

        Ok(Self {
            id: id.to_string(),
            target,
            username_prompt: config.username_prompt.clone(),
            backend,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn verify(&self, ctx: &LoginContext, credential: &Credential) -> Result<(), ConnectorError> {
        let mut session = ctx
            .run(async {
                self.backend
                    .connect(&self.target, credential)
                    .await
                    .map_err(ConnectorError::Connection)
            })
            .await?;

        let probe = ctx
            .run(async { session.probe().await.map_err(ConnectorError::Probe) })
            .await;

        match probe {
            // Dropped rather than closed so the caller is not held up.
            Err(e) if e.is_context_error() => Err(e),
            probe => {
                session.close().await;
                probe.map(|_| ())
            }
        }
    }
}

#[async_trait]
impl<B: Backend> PasswordConnector for MysqlConnector<B> {
    fn prompt(&self) -> &str {
        &self.username_prompt
    }

    async fn login(
        &self,
        ctx: &LoginContext,
        _scopes: &Scopes,
        username: &str,
        password: &str,
    ) -> Result<LoginResult, ConnectorError> {
        let credential = Credential::new(username, password);
        if !credential.has_password() {
            return Ok(LoginResult::rejected());
        }

        debug!("Connector {}: login attempt for {}", self.id, username);

        self.verify(ctx, &credential).await?;

        debug!("Connector {}: {} authenticated", self.id, username);
        Ok(LoginResult::authenticated(Identity::for_username(username)))
    }
}
