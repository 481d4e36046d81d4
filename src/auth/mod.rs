//! Authentication
//!
//! Connector-facing types and the password verifier: credentials in,
//! identity out.

pub mod connector;
pub mod context;
pub mod credentials;
pub mod identity;
pub mod results;
pub mod verifier;

pub use connector::{OpenConnector, PasswordConnector};
pub use context::{CancelHandle, LoginContext};
pub use credentials::Credential;
pub use identity::{Identity, Scopes};
pub use results::LoginResult;
pub use verifier::MysqlConnector;
