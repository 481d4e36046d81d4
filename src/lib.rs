//! MySQL / MariaDB password connector
//!
//! Checks a username and password by logging in to a MySQL-compatible server
//! with them and running a trivial query.

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;

pub use auth::{Identity, LoginContext, LoginResult, MysqlConnector, PasswordConnector, Scopes};
pub use config::ConnectorConfig;
pub use error::{ConfigError, ConnectorError};
