//! Configuration management for the MySQL login connector
//!
//! Loads the connector's settings from a TOML/JSON source with environment
//! overrides, and validates them once before a connector is built.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::auth::{MysqlConnector, OpenConnector};
use crate::backend::{ConnectionTarget, MySqlBackend};
use crate::error::ConfigError;

/// Environment variable prefix, e.g. `MYSQL_CONNECTOR_PORT=3306`
pub const ENV_PREFIX: &str = "MYSQL_CONNECTOR";

/// Connector configuration as supplied by the host
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Host name or address of the database server
    #[serde(default)]
    pub server: String,

    /// Database server port. Zero means unset.
    #[serde(default)]
    pub port: u16,

    /// Label for the username field in the host's login form
    #[serde(default, alias = "usernamePrompt", alias = "usernameprompt")]
    pub username_prompt: String,
}

impl ConnectorConfig {
    pub fn new(server: impl Into<String>, port: u16) -> Self {
        Self {
            server: server.into(),
            port,
            username_prompt: String::new(),
        }
    }

    pub fn with_username_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.username_prompt = prompt.into();
        self
    }

    /// Load configuration from a file (extension picks the format) with
    /// `MYSQL_CONNECTOR_*` environment overrides
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from an inline TOML or JSON document
    pub fn parse(content: &str, format: FileFormat) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(content, format))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Checks required fields in order (server, then port) and returns the
    /// connection target
    pub fn validate(&self) -> Result<ConnectionTarget, ConfigError> {
        if self.server.is_empty() {
            return Err(ConfigError::MissingField("server"));
        }

        if self.port == 0 {
            return Err(ConfigError::MissingField("port"));
        }

        Ok(ConnectionTarget::new(self.server.clone(), self.port))
    }

    /// Build a connector that talks to a real MySQL server
    pub fn open_connector(&self, id: &str) -> Result<MysqlConnector<MySqlBackend>, ConfigError> {
        MysqlConnector::new(id, self, MySqlBackend::new())
    }
}

impl OpenConnector for ConnectorConfig {
    type Connector = MysqlConnector<MySqlBackend>;

    fn open(&self, id: &str) -> Result<Self::Connector, ConfigError> {
        self.open_connector(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::PasswordConnector;

    #[test]
    fn missing_server_reported_first() {
        let cfg = ConnectorConfig::new("", 0);
        assert!(matches!(cfg.validate(), Err(ConfigError::MissingField("server"))));
    }

    #[test]
    fn missing_port_reported() {
        let cfg = ConnectorConfig::new("db.internal", 0);
        assert!(matches!(cfg.validate(), Err(ConfigError::MissingField("port"))));
    }

    #[test]
    fn valid_config_yields_target() {
        let target = ConnectorConfig::new("db.internal", 3306).validate().unwrap();
        assert_eq!(target, ConnectionTarget::new("db.internal", 3306));
        assert_eq!(target.to_string(), "db.internal:3306");
    }

    #[test]
    fn loads_toml() {
        let cfg = ConnectorConfig::parse(
            "server = \"10.0.0.5\"\nport = 3307\nusername_prompt = \"DB user\"\n",
            FileFormat::Toml,
        )
        .unwrap();
        assert_eq!(
            cfg,
            ConnectorConfig::new("10.0.0.5", 3307).with_username_prompt("DB user")
        );
    }

    #[test]
    fn loads_host_json_shape() {
        let cfg = ConnectorConfig::parse(
            r#"{"server": "mariadb", "port": 3306, "usernamePrompt": "MariaDB login"}"#,
            FileFormat::Json,
        )
        .unwrap();
        assert_eq!(cfg.server, "mariadb");
        assert_eq!(cfg.port, 3306);
        assert_eq!(cfg.username_prompt, "MariaDB login");
    }

    #[test]
    fn absent_fields_fail_validation_not_loading() {
        let cfg = ConnectorConfig::parse("server = \"db\"\n", FileFormat::Toml).unwrap();
        assert_eq!(cfg.port, 0);
        assert!(matches!(cfg.validate(), Err(ConfigError::MissingField("port"))));
    }

    #[test]
    fn malformed_port_is_a_load_error() {
        let res = ConnectorConfig::parse("server = \"db\"\nport = \"abc\"\n", FileFormat::Toml);
        assert!(matches!(res, Err(ConfigError::Load(_))));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let res = ConnectorConfig::load("does-not-exist/connector");
        assert!(matches!(res, Err(ConfigError::Load(_))));
    }

    #[test]
    fn open_keeps_id_and_prompt() {
        let cfg = ConnectorConfig::new("localhost", 3306).with_username_prompt("Username");
        let connector = cfg.open("mysql").unwrap();
        assert_eq!(connector.id(), "mysql");
        assert_eq!(connector.prompt(), "Username");
        assert_eq!(connector.target(), &ConnectionTarget::new("localhost", 3306));
    }

    #[test]
    fn open_rejects_invalid_config() {
        let res = ConnectorConfig::default().open("mysql");
        assert!(matches!(res, Err(ConfigError::MissingField("server"))));
    }
}
