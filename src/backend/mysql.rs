//! MySQL / MariaDB backend
//!
//! Each login opens one `sqlx` connection with the caller's credentials, runs
//! the probe on it and closes it again. Nothing is pooled or retried: a
//! refused connection is reported on the first attempt.

use async_trait::async_trait;
use log::debug;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};

use super::{Backend, ConnectionTarget, Session};
use crate::auth::Credential;
use crate::error::BackendError;

/// Query used to confirm a session is live. Its value carries no meaning.
pub const PROBE_QUERY: &str = "SELECT 1 * 5";

/// Backend speaking the MySQL wire protocol through `sqlx`.
#[derive(Debug, Clone, Default)]
pub struct MySqlBackend;

impl MySqlBackend {
    pub fn new() -> Self {
        Self
    }

    fn connect_options(target: &ConnectionTarget, credential: &Credential) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&target.host)
            .port(target.port)
            .username(credential.username())
            .password(credential.password())
    }
}

#[async_trait]
impl Backend for MySqlBackend {
    async fn connect(
        &self,
        target: &ConnectionTarget,
        credential: &Credential,
    ) -> Result<Box<dyn Session>, BackendError> {
        debug!("Opening MySQL session to {} as {}", target, credential.username());

        let conn = Self::connect_options(target, credential).connect().await?;

        Ok(Box::new(MySqlSession { conn }))
    }
}

struct MySqlSession {
    conn: MySqlConnection,
}

#[async_trait]
impl Session for MySqlSession {
    async fn probe(&mut self) -> Result<i64, BackendError> {
        let value = sqlx::query_scalar::<_, i64>(PROBE_QUERY)
            .fetch_one(&mut self.conn)
            .await?;
        Ok(value)
    }

    async fn close(self: Box<Self>) {
        if let Err(e) = self.conn.close().await {
            debug!("MySQL session did not close cleanly: {}", e);
        }
    }
}
